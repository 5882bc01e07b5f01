mod linkvalidator_tests;

/// Installs a trace level logger once, for tests that want to see the
/// validation steps in their output.
pub(crate) fn init_logging() {
    let _ = colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
