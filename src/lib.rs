// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checks;
mod cnp;
mod config;
mod error;
mod observability;
mod secondary_validation;
mod validation;
mod validator;

// This is the public API of the CNP validation library
pub use checks::{control_digit, region_name, CHECKSUM_WEIGHTS, CNP_LENGTH};
pub use cnp::{Cnp, Gender, Region, Residency};
pub use config::{CnpValidatorConfig, ValidationLevel, ValidatorConfigError};
pub use error::CnpValidationError;
pub use observability::labels::Labels;
pub use secondary_validation::{
    RomanianPersonalNumericCode, RomanianPersonalNumericCodeChecksum, Validator,
};
pub use validation::{validate, validate_checksum};
pub use validator::CnpValidator;
