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

use strum::EnumIter;
use thiserror::Error;

/// Reasons a number is refused before any link is built. Checks run in
/// declaration order and the first failing one is reported.
///
/// The messages are meant to be shown to the user as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Error)]
pub enum ValidationError {
    /// No country calling code has been picked.
    #[error("Please select a country code")]
    NoCountrySelected,
    /// The number field is empty or holds only whitespace.
    #[error("Please enter a phone number")]
    EmptyNumber,
    /// The trimmed number is shorter than 10 or longer than 15 characters,
    /// or contains something other than ASCII digits.
    #[error("Please enter a valid phone number (10-15 digits)")]
    BadFormat,
}

impl ValidationError {
    /// Whether the problem belongs to the number field itself rather than
    /// to the screen as a whole.
    pub fn is_field_error(&self) -> bool {
        !matches!(self, ValidationError::NoCountrySelected)
    }
}
