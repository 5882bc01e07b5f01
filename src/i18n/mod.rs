mod country_code;
mod registry;

pub use country_code::{CountryCode, DEFAULT_DIAL_CODE};
pub use registry::{COUNTRY_CODE_REGISTRY, CountryCodeRegistry, RegistryError};
