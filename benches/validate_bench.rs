// benches/validate_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wa_link::{i18n::COUNTRY_CODE_REGISTRY, LINK_VALIDATOR};

/// Inputs covering each exit of `validate`.
fn setup_inputs() -> Vec<&'static str> {
    vec![
        // plain valid number
        "9876543210",
        // valid, with whitespace and a trunk prefix
        "  09876543210 ",
        // longest accepted
        "123456789012345",
        // too short
        "12345",
        // letters
        "12345abcde",
        // empty
        "   ",
    ]
}

fn validate_benchmark(c: &mut Criterion) {
    let inputs = setup_inputs();
    let country = COUNTRY_CODE_REGISTRY
        .default_country()
        .expect("default country is compiled in");

    let mut group = c.benchmark_group("Link validation");

    group.bench_function("validate(): mixed inputs", |b| {
        b.iter(|| {
            for raw in &inputs {
                let _ = LINK_VALIDATOR.validate(black_box(Some(country)), black_box(raw));
            }
        })
    });

    group.bench_function("find_by_dial_code()", |b| {
        b.iter(|| COUNTRY_CODE_REGISTRY.find_by_dial_code(black_box("+880")))
    });

    group.finish();
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
