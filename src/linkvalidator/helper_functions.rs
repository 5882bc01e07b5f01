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

use super::helper_constants::{
    MAX_NUMBER_LENGTH, MIN_NUMBER_LENGTH, NATIONAL_PREFIX_DIGIT, PLUS_SIGN, WA_ME_PREFIX,
};

/// Checks the length window. Takes the length of the trimmed input,
/// before leading zeros are stripped.
pub(crate) fn test_number_length(len: usize) -> bool {
    (MIN_NUMBER_LENGTH..=MAX_NUMBER_LENGTH).contains(&len)
}

/// Removes every leading zero, not just one. An all-zero input yields an
/// empty string and that is passed on unchanged.
pub(crate) fn canonical_number(trimmed: &str) -> &str {
    trimmed.trim_start_matches(NATIONAL_PREFIX_DIGIT)
}

pub(crate) fn dial_code_digits(dial_code: &str) -> &str {
    dial_code.strip_prefix(PLUS_SIGN).unwrap_or(dial_code)
}

pub(crate) fn build_wa_link(code_digits: &str, clean_number: &str) -> String {
    // single allocation with the exact resulting capacity
    fast_cat::concat_str!(WA_ME_PREFIX, code_digits, clean_number)
}
