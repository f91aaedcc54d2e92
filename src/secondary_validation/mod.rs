mod romanian_personal_numeric_code;

use crate::config::ValidationLevel;
pub use crate::secondary_validation::romanian_personal_numeric_code::{
    RomanianPersonalNumericCode, RomanianPersonalNumericCodeChecksum,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

impl Validator for ValidationLevel {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match self {
            ValidationLevel::Full => RomanianPersonalNumericCode.is_valid_match(candidate),
            ValidationLevel::ChecksumOnly => {
                RomanianPersonalNumericCodeChecksum.is_valid_match(candidate)
            }
        }
    }
}
