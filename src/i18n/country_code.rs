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

use std::fmt;

/// Dial code of the country preselected when a session starts (India).
pub const DEFAULT_DIAL_CODE: &str = "+91";

/// A country calling code paired with the name shown next to it.
///
/// Two entries are the same country when their dial codes are equal.
/// A dial code is always a `+` followed by one to three ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode {
    dial_code: &'static str,
    display_name: &'static str,
}

impl CountryCode {
    pub const fn new(dial_code: &'static str, display_name: &'static str) -> Self {
        Self { dial_code, display_name }
    }

    /// Dial code including the leading `+`, e.g. `+91`.
    pub fn dial_code(&self) -> &'static str {
        self.dial_code
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.dial_code)
    }
}

/// Compiled-in country list, in the order it is presented to the user.
/// Dial codes must stay unique: `+1` is listed once for the whole NANP zone.
pub(super) const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode::new("+93", "Afghanistan"),
    CountryCode::new("+54", "Argentina"),
    CountryCode::new("+61", "Australia"),
    CountryCode::new("+43", "Austria"),
    CountryCode::new("+880", "Bangladesh"),
    CountryCode::new("+32", "Belgium"),
    CountryCode::new("+55", "Brazil"),
    CountryCode::new("+86", "China"),
    CountryCode::new("+57", "Colombia"),
    CountryCode::new("+20", "Egypt"),
    CountryCode::new("+33", "France"),
    CountryCode::new("+49", "Germany"),
    CountryCode::new("+233", "Ghana"),
    CountryCode::new("+30", "Greece"),
    CountryCode::new("+852", "Hong Kong"),
    CountryCode::new("+91", "India"),
    CountryCode::new("+62", "Indonesia"),
    CountryCode::new("+98", "Iran"),
    CountryCode::new("+964", "Iraq"),
    CountryCode::new("+353", "Ireland"),
    CountryCode::new("+972", "Israel"),
    CountryCode::new("+39", "Italy"),
    CountryCode::new("+81", "Japan"),
    CountryCode::new("+254", "Kenya"),
    CountryCode::new("+965", "Kuwait"),
    CountryCode::new("+60", "Malaysia"),
    CountryCode::new("+52", "Mexico"),
    CountryCode::new("+977", "Nepal"),
    CountryCode::new("+31", "Netherlands"),
    CountryCode::new("+64", "New Zealand"),
    CountryCode::new("+234", "Nigeria"),
    CountryCode::new("+47", "Norway"),
    CountryCode::new("+968", "Oman"),
    CountryCode::new("+92", "Pakistan"),
    CountryCode::new("+63", "Philippines"),
    CountryCode::new("+48", "Poland"),
    CountryCode::new("+351", "Portugal"),
    CountryCode::new("+974", "Qatar"),
    CountryCode::new("+7", "Russia"),
    CountryCode::new("+966", "Saudi Arabia"),
    CountryCode::new("+65", "Singapore"),
    CountryCode::new("+27", "South Africa"),
    CountryCode::new("+82", "South Korea"),
    CountryCode::new("+34", "Spain"),
    CountryCode::new("+94", "Sri Lanka"),
    CountryCode::new("+46", "Sweden"),
    CountryCode::new("+41", "Switzerland"),
    CountryCode::new("+66", "Thailand"),
    CountryCode::new("+90", "Turkey"),
    CountryCode::new("+380", "Ukraine"),
    CountryCode::new("+971", "United Arab Emirates"),
    CountryCode::new("+44", "United Kingdom"),
    CountryCode::new("+1", "United States"),
    CountryCode::new("+84", "Vietnam"),
];
