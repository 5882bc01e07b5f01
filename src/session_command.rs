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

use thiserror::Error;

use crate::linkvalidator::helper_constants::PLUS_SIGN;

/// Marks a session input line as a command rather than a phone number.
pub const COMMAND_PREFIX: char = '/';

/// A `/command` typed in the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Quit,
    List,
    /// `/country +<code>`: selection by dial code.
    SelectDialCode(String),
    /// `/country <n>`: selection by position in the list. A bare number is
    /// always a position, `/country 91` does not mean India.
    SelectPosition(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionCommandError {
    #[error("Usage: /country <position|+code>")]
    MissingCountry,
    #[error("Not a position: {0}")]
    NotAPosition(String),
    #[error("Unknown command: /{0}")]
    Unknown(String),
}

impl SessionCommand {
    /// Parses the text after the leading `/`.
    pub fn parse(command: &str) -> Result<Self, SessionCommandError> {
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit"), _) => Ok(SessionCommand::Quit),
            (Some("list"), _) => Ok(SessionCommand::List),
            (Some("country"), None) => Err(SessionCommandError::MissingCountry),
            (Some("country"), Some(code)) if code.starts_with(PLUS_SIGN) => {
                Ok(SessionCommand::SelectDialCode(code.to_owned()))
            }
            (Some("country"), Some(position)) => position
                .parse::<usize>()
                .map(SessionCommand::SelectPosition)
                .map_err(|_| SessionCommandError::NotAPosition(position.to_owned())),
            _ => Err(SessionCommandError::Unknown(command.trim().to_owned())),
        }
    }

    /// Returns the parsed command when `line` starts with `/`, `None` when
    /// the line is a phone number.
    pub fn from_line(line: &str) -> Option<Result<Self, SessionCommandError>> {
        line.trim().strip_prefix(COMMAND_PREFIX).map(Self::parse)
    }
}
