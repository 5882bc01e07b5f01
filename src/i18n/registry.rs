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

use std::sync::LazyLock;

use log::error;
use thiserror::Error;

use super::country_code::{COUNTRY_CODES, CountryCode, DEFAULT_DIAL_CODE};
use crate::linkvalidator::{LINK_VALIDATOR, helper_constants::PLUS_SIGN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The compiled country list lacks the default entry. This is a build
    /// time mistake and never happens with the shipped list.
    #[error("Default country {0} is missing from the country list")]
    Configuration(&'static str),
    #[error("Country position {index} is out of range, list has {len} entries")]
    OutOfRange { index: usize, len: usize },
    /// A dial code that is not `+` followed by one to three ASCII digits.
    #[error("Malformed dial code {dial_code:?} for {display_name}")]
    MalformedDialCode {
        dial_code: &'static str,
        display_name: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

pub static COUNTRY_CODE_REGISTRY: LazyLock<CountryCodeRegistry> =
    LazyLock::new(CountryCodeRegistry::new);

/// Read-only, ordered list of the selectable country calling codes.
///
/// The order of [`CountryCodeRegistry::all_countries`] is the order used by
/// [`CountryCodeRegistry::find_by_position`], so a front-end can render the
/// list and map a picked row straight back to its entry.
#[derive(Debug, Clone)]
pub struct CountryCodeRegistry {
    countries: Vec<CountryCode>,
}

impl CountryCodeRegistry {
    /// Builds the registry from the compiled-in country list. Its dial codes
    /// are checked by the registry tests, not at runtime.
    pub fn new() -> Self {
        Self { countries: COUNTRY_CODES.to_vec() }
    }

    /// Builds a registry from a custom list. Fails on the first entry whose
    /// dial code is not `+` followed by one to three ASCII digits.
    pub fn with_countries(countries: Vec<CountryCode>) -> Result<Self> {
        if let Some(bad) = countries
            .iter()
            .find(|country| !LINK_VALIDATOR.is_valid_dial_code(country.dial_code()))
        {
            error!("Rejecting country list: malformed dial code {:?}", bad.dial_code());
            return Err(RegistryError::MalformedDialCode {
                dial_code: bad.dial_code(),
                display_name: bad.display_name(),
            });
        }
        Ok(Self { countries })
    }

    pub fn all_countries(&self) -> &[CountryCode] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn default_country(&self) -> Result<&CountryCode> {
        self.countries
            .iter()
            .find(|country| country.dial_code() == DEFAULT_DIAL_CODE)
            .ok_or_else(|| {
                error!("Country list has no entry for default dial code {}", DEFAULT_DIAL_CODE);
                RegistryError::Configuration(DEFAULT_DIAL_CODE)
            })
    }

    pub fn find_by_position(&self, index: usize) -> Result<&CountryCode> {
        self.countries.get(index).ok_or(RegistryError::OutOfRange {
            index,
            len: self.countries.len(),
        })
    }

    /// Looks a country up by its dial code. The leading `+` is optional,
    /// so `"91"` and `"+91"` find the same entry.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&CountryCode> {
        let wanted = dial_code.trim();
        let wanted = wanted.strip_prefix(PLUS_SIGN).unwrap_or(wanted);
        if wanted.is_empty() {
            return None;
        }
        self.countries.iter().find(|country| {
            country
                .dial_code()
                .strip_prefix(PLUS_SIGN)
                .is_some_and(|digits| digits == wanted)
        })
    }
}

impl Default for CountryCodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
