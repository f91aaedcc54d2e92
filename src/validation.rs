use crate::checks::{
    birth_date, check_control_digit, check_format, check_region, check_sequence,
};
use crate::error::CnpValidationError;
use chrono::NaiveDate;

/// Checks that a string is a valid Romanian personal numeric code (CNP).
///
/// The checks run in a fixed order and the first failure is returned:
/// format, birth date, region, sequence number, control digit.
pub fn validate(code: &str) -> Result<(), CnpValidationError> {
    validate_and_get_birth_date(code).map(|_| ())
}

/// Same as [validate], but hands back the birth date reconstructed along the way.
pub(crate) fn validate_and_get_birth_date(code: &str) -> Result<NaiveDate, CnpValidationError> {
    check_format(code)?;
    let code = code.as_bytes();

    let birth_date = birth_date(code)?;
    check_region(code, birth_date)?;
    check_sequence(code)?;
    check_control_digit(code)?;

    Ok(birth_date)
}

/// Only checks the format and the control digit, ignoring what the digits encode.
pub fn validate_checksum(code: &str) -> Result<(), CnpValidationError> {
    check_format(code)?;
    check_control_digit(code.as_bytes())
}
