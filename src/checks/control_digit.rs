use crate::checks::{digit_value, CONTROL};
use crate::error::CnpValidationError;

pub const CHECKSUM_WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

fn weighted_control_digit(digits: &[u8]) -> u32 {
    let calculated_checksum = digits
        .iter()
        .zip(CHECKSUM_WEIGHTS.iter())
        .map(|(d, w)| digit_value(*d) * w)
        .sum::<u32>()
        % 11;

    // 10 does not fit in a single digit and is written as 1
    if calculated_checksum == 10 {
        1
    } else {
        calculated_checksum
    }
}

/// Expected control digit for the first 12 digits of a code.
///
/// Returns `None` unless the input is exactly 12 ASCII digits. The decoded meaning of the
/// digits (date, region, ...) plays no part in the result.
pub fn control_digit(first_twelve: &str) -> Option<u32> {
    let digits = first_twelve.as_bytes();
    if digits.len() != CHECKSUM_WEIGHTS.len() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(weighted_control_digit(digits))
}

/// Compares the 13th digit of a well-formed code with the weighted sum of the other twelve.
pub fn check_control_digit(code: &[u8]) -> Result<(), CnpValidationError> {
    if weighted_control_digit(&code[..CONTROL]) == digit_value(code[CONTROL]) {
        Ok(())
    } else {
        Err(CnpValidationError::InvalidChecksumError)
    }
}
