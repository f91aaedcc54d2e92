use crate::secondary_validation::Validator;
use crate::validation::{validate, validate_checksum};

/// Every rule of the CNP: format, birth date, region, sequence and control digit.
pub struct RomanianPersonalNumericCode;

/// Only the format and the control digit, the way a scanner filters candidate matches.
pub struct RomanianPersonalNumericCodeChecksum;

impl Validator for RomanianPersonalNumericCode {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate(candidate).is_ok()
    }
}

impl Validator for RomanianPersonalNumericCodeChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        validate_checksum(candidate).is_ok()
    }
}
