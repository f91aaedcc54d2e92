use crate::checks::{number, SEQUENCE};
use crate::error::CnpValidationError;

const SEQUENCE_RANGE: std::ops::RangeInclusive<u32> = 1..=999;

/// The running number NNN must not be 000.
pub fn check_sequence(code: &[u8]) -> Result<(), CnpValidationError> {
    if SEQUENCE_RANGE.contains(&number(&code[SEQUENCE])) {
        Ok(())
    } else {
        Err(CnpValidationError::InvalidSequenceError)
    }
}
