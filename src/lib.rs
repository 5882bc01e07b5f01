mod interfaces;
mod linkvalidator;
mod exit_gate;
mod session;
mod session_command;
mod system_launcher;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use exit_gate::{DEFAULT_EXIT_INTERVAL_MS, ExitAction, ExitGate, ExitGateState, SystemClock};
pub use interfaces::{Clock, LaunchOutcome, LinkLauncher};
pub use linkvalidator::{LINK_VALIDATOR, LinkValidator, ValidationError, ValidationResult};
pub use session::{EXIT_HINT_MESSAGE, Feedback, NOT_INSTALLED_MESSAGE, Session};
pub use session_command::{COMMAND_PREFIX, SessionCommand, SessionCommandError};
pub use system_launcher::{DEFAULT_OPENER_WAIT, DryRunLauncher, SystemLauncher};

use i18n::CountryCode;

/// Shorthand for [`LinkValidator::validate`] on the shared validator.
pub fn validate(selected: Option<&CountryCode>, raw_number: &str) -> ValidationResult {
    LINK_VALIDATOR.validate(selected, raw_number)
}
