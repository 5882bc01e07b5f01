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

use regex::Regex;

use super::helper_constants::{ASCII_DIGITS, PLUS_SIGN};

/// Regular expressions used while checking user input.
pub(super) struct LinkRegExps {
    /// One or more ASCII digits. Use with `full_match`.
    pub digits_pattern: Regex,
    /// A dial code as stored in the country list: `+` and one to three digits.
    pub dial_code_pattern: Regex,
}

impl LinkRegExps {
    pub fn new() -> Self {
        Self {
            // it'll be initialized only once, so we can use slow format!
            digits_pattern: Regex::new(&format!("{}+", ASCII_DIGITS)).unwrap(),
            dial_code_pattern: Regex::new(
                &format!("\\{}{}{{1,3}}", PLUS_SIGN, ASCII_DIGITS)
            ).unwrap(),
        }
    }
}
