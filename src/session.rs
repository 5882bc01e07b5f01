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

use log::{debug, error, info};

use crate::{
    exit_gate::{ExitAction, ExitGate, ExitGateState},
    i18n::{CountryCode, CountryCodeRegistry, RegistryError},
    interfaces::{Clock, LaunchOutcome, LinkLauncher},
    linkvalidator::LINK_VALIDATOR,
};

pub const EXIT_HINT_MESSAGE: &'static str = "Press back again to exit";
pub const NOT_INSTALLED_MESSAGE: &'static str =
    "WhatsApp is not installed and nothing else can open the link";

/// What the front-end has to show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Short-lived success notification.
    Success(String),
    /// Notification for a failure that is not tied to the number field.
    Error(String),
    /// Error text shown inline on the number field.
    FieldError(String),
    /// Short-lived hint.
    Hint(String),
    /// Ask whether to quit.
    ConfirmExit,
}

/// State of one screen session: the selected country, the exit gate and
/// the collaborators used to open links and read time.
pub struct Session<'a> {
    registry: &'a CountryCodeRegistry,
    selected: Option<CountryCode>,
    gate: ExitGate,
    gate_state: ExitGateState,
    launcher: Box<dyn LinkLauncher>,
    clock: Box<dyn Clock>,
}

impl<'a> Session<'a> {
    /// Starts a session with the default country preselected.
    pub fn new(
        registry: &'a CountryCodeRegistry,
        launcher: Box<dyn LinkLauncher>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let selected = match registry.default_country() {
            Ok(country) => Some(*country),
            Err(err) => {
                error!("Starting without a preselected country: {}", err);
                None
            }
        };
        Self {
            registry,
            selected,
            gate: ExitGate::new(),
            gate_state: ExitGateState::new(),
            launcher,
            clock,
        }
    }

    pub fn with_exit_gate(mut self, gate: ExitGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn registry(&self) -> &'a CountryCodeRegistry {
        self.registry
    }

    pub fn selected(&self) -> Option<&CountryCode> {
        self.selected.as_ref()
    }

    pub fn gate_state(&self) -> &ExitGateState {
        &self.gate_state
    }

    pub fn select_position(&mut self, index: usize) -> Result<CountryCode, RegistryError> {
        let country = *self.registry.find_by_position(index)?;
        debug!("Selected {} at position {}", country, index);
        self.selected = Some(country);
        Ok(country)
    }

    pub fn select_dial_code(&mut self, dial_code: &str) -> Option<CountryCode> {
        let country = *self.registry.find_by_dial_code(dial_code)?;
        debug!("Selected {} by dial code", country);
        self.selected = Some(country);
        Some(country)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Validates the number and, when it passes, hands the link to the
    /// launcher.
    pub fn submit(&mut self, raw_number: &str) -> Feedback {
        let link = match LINK_VALIDATOR.validate(self.selected.as_ref(), raw_number) {
            Ok(link) => link,
            Err(err) if err.is_field_error() => return Feedback::FieldError(err.to_string()),
            Err(err) => return Feedback::Error(err.to_string()),
        };

        match self.launcher.launch(&link) {
            LaunchOutcome::Launched => {
                info!("Opened {}", link);
                Feedback::Success(format!("Opening WhatsApp chat: {}", link))
            }
            LaunchOutcome::NoHandler => Feedback::Error(NOT_INSTALLED_MESSAGE.to_owned()),
            LaunchOutcome::OtherFailure(message) => Feedback::Error(format!("Error: {}", message)),
        }
    }

    /// Back press at the current clock time.
    pub fn back_pressed(&mut self) -> Feedback {
        let now = self.clock.now_ms();
        self.back_pressed_at(now)
    }

    pub fn back_pressed_at(&mut self, now_ms: u64) -> Feedback {
        match self.gate.on_back_pressed(&mut self.gate_state, now_ms) {
            ExitAction::ShowHint => Feedback::Hint(EXIT_HINT_MESSAGE.to_owned()),
            ExitAction::ConfirmExit => Feedback::ConfirmExit,
        }
    }
}
