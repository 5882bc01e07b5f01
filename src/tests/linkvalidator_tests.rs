use strum::IntoEnumIterator;

use super::init_logging;
use crate::{
    i18n::{CountryCode, COUNTRY_CODE_REGISTRY},
    linkvalidator::{ValidationError, LINK_VALIDATOR},
};

fn india() -> CountryCode {
    CountryCode::new("+91", "India")
}

fn united_states() -> CountryCode {
    CountryCode::new("+1", "United States")
}

#[test]
fn valid_number_builds_link() {
    init_logging();
    assert_eq!(
        Ok("https://wa.me/919876543210".to_owned()),
        LINK_VALIDATOR.validate(Some(&india()), "9876543210")
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        Ok("https://wa.me/919876543210".to_owned()),
        LINK_VALIDATOR.validate(Some(&india()), "  9876543210\t\n")
    );
}

#[test]
fn no_country_wins_over_everything_else() {
    for raw in ["", "   ", "123", "12345abcde", "9876543210", "0000000000"] {
        assert_eq!(
            Err(ValidationError::NoCountrySelected),
            LINK_VALIDATOR.validate(None, raw),
            "input {:?}",
            raw
        );
    }
}

#[test]
fn empty_number() {
    for raw in ["", " ", "\t", " \n \r "] {
        assert_eq!(
            Err(ValidationError::EmptyNumber),
            LINK_VALIDATOR.validate(Some(&india()), raw),
            "input {:?}",
            raw
        );
    }
}

#[test]
fn length_boundaries() {
    let country = india();
    assert_eq!(Err(ValidationError::BadFormat), LINK_VALIDATOR.validate(Some(&country), "123456789"));
    assert_eq!(
        Ok("https://wa.me/911234567890".to_owned()),
        LINK_VALIDATOR.validate(Some(&country), "1234567890")
    );
    assert_eq!(
        Ok("https://wa.me/91123456789012345".to_owned()),
        LINK_VALIDATOR.validate(Some(&country), "123456789012345")
    );
    assert_eq!(
        Err(ValidationError::BadFormat),
        LINK_VALIDATOR.validate(Some(&country), "1234567890123456")
    );
}

#[test]
fn non_digits_are_rejected() {
    let country = india();
    for raw in [
        "12345abcde",
        "+919876543210",
        "98765 43210",
        "98765-43210",
        "(987)6543210",
        // full-width digits
        "９８７６５４３２１０",
        "987654321٠",
    ] {
        assert_eq!(
            Err(ValidationError::BadFormat),
            LINK_VALIDATOR.validate(Some(&country), raw),
            "input {:?}",
            raw
        );
    }
}

#[test]
fn leading_zeros_are_all_stripped() {
    assert_eq!(
        Ok("https://wa.me/112345678".to_owned()),
        LINK_VALIDATOR.validate(Some(&united_states()), "0012345678")
    );
}

#[test]
fn length_is_checked_before_stripping_zeros() {
    // ten characters pass the length check even though only one digit survives
    assert_eq!(
        Ok("https://wa.me/15".to_owned()),
        LINK_VALIDATOR.validate(Some(&united_states()), "0000000005")
    );
}

#[test]
fn all_zero_number_leaves_empty_number_part() {
    assert_eq!(
        Ok("https://wa.me/1".to_owned()),
        LINK_VALIDATOR.validate(Some(&united_states()), "0000000000")
    );
}

#[test]
fn validation_is_deterministic() {
    let country = india();
    for raw in ["9876543210", "", "12345abcde", "0012345678"] {
        assert_eq!(
            LINK_VALIDATOR.validate(Some(&country), raw),
            crate::validate(Some(&country), raw)
        );
    }
}

#[test]
fn every_registry_country_builds_its_prefix() {
    for country in COUNTRY_CODE_REGISTRY.all_countries() {
        let link = LINK_VALIDATOR.validate(Some(country), "9876543210").unwrap();
        let expected = format!("https://wa.me/{}9876543210", &country.dial_code()[1..]);
        assert_eq!(expected, link);
    }
}

#[test]
fn reasons_have_messages() {
    for reason in ValidationError::iter() {
        assert!(!reason.to_string().is_empty());
    }
    assert!(!ValidationError::NoCountrySelected.is_field_error());
    assert!(ValidationError::EmptyNumber.is_field_error());
    assert!(ValidationError::BadFormat.is_field_error());
}
