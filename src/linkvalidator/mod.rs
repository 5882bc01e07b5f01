pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
mod link_regexps;
pub mod errors;
pub mod linkvalidator;

use std::sync::LazyLock;

pub use errors::ValidationError;
pub use linkvalidator::{LinkValidator, ValidationResult};

pub static LINK_VALIDATOR: LazyLock<LinkValidator> = LazyLock::new(|| {
    LinkValidator::new()
});
