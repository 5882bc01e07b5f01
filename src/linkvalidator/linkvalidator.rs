// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use super::{
    errors::ValidationError,
    helper_functions::{build_wa_link, canonical_number, dial_code_digits, test_number_length},
    link_regexps::LinkRegExps,
};
use crate::{i18n::CountryCode, regex_util::RegexFullMatch};

/// `Ok` holds the canonical `https://wa.me/...` link, `Err` the reason the
/// input was refused.
pub type ValidationResult = std::result::Result<String, ValidationError>;

pub struct LinkValidator {
    reg_exps: LinkRegExps,
}

impl LinkValidator {
    pub(super) fn new() -> Self {
        Self { reg_exps: LinkRegExps::new() }
    }

    /// Validates `raw_number` for the `selected` country and builds the
    /// chat link for it.
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. a country must be selected,
    /// 2. the trimmed number must not be empty,
    /// 3. the trimmed number must be 10 to 15 ASCII digits.
    ///
    /// All leading zeros are then dropped and the result is appended to the
    /// dial code digits. The length check sees the number before zeros are
    /// dropped, so `"0000000000"` is accepted and produces a link with an
    /// empty number part.
    ///
    /// Pure function: nothing is checked against the network.
    pub fn validate(&self, selected: Option<&CountryCode>, raw_number: &str) -> ValidationResult {
        let Some(country) = selected else {
            trace!("Rejecting number: no country selected");
            return Err(ValidationError::NoCountrySelected);
        };

        let trimmed = raw_number.trim();
        if trimmed.is_empty() {
            trace!("Rejecting number: empty input");
            return Err(ValidationError::EmptyNumber);
        }

        if !self.is_well_formed_number(trimmed) {
            trace!("Rejecting number {:?}: bad format", trimmed);
            return Err(ValidationError::BadFormat);
        }

        let clean_number = canonical_number(trimmed);
        let link = build_wa_link(dial_code_digits(country.dial_code()), clean_number);
        trace!("Number {} for {} resolved to {}", trimmed, country.dial_code(), link);
        Ok(link)
    }

    /// Length window and digit check on an already trimmed number.
    pub fn is_well_formed_number(&self, trimmed: &str) -> bool {
        test_number_length(trimmed.chars().count())
            && self.reg_exps.digits_pattern.full_match(trimmed)
    }

    /// Whether `dial_code` has the shape stored in the country list.
    pub fn is_valid_dial_code(&self, dial_code: &str) -> bool {
        self.reg_exps.dial_code_pattern.full_match(dial_code)
    }
}
