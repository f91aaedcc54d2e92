use std::convert::From;
use thiserror::Error;

/// The reason a code was rejected. Variants follow the order in which the checks run,
/// so at most one of them is ever reported for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CnpValidationError {
    /// Not exactly 13 ASCII digits
    #[error("CNP must be exactly 13 ASCII digits")]
    FormatError,

    /// Unknown century selector, or the encoded birth date does not exist
    #[error("invalid birth date in CNP")]
    InvalidDateError,

    /// Region code is not assigned, or not assigned for this birth date / selector
    #[error("invalid region code in CNP")]
    InvalidRegionError,

    /// Running number is 000
    #[error("invalid sequence number in CNP")]
    InvalidSequenceError,

    /// Control digit does not match the weighted sum of the first 12 digits
    #[error("invalid control digit in CNP")]
    InvalidChecksumError,
}

impl CnpValidationError {
    /// Short, stable name of the failing check. Used as a metric label value.
    pub fn kind(&self) -> &'static str {
        match self {
            CnpValidationError::FormatError => "format",
            CnpValidationError::InvalidDateError => "date",
            CnpValidationError::InvalidRegionError => "region",
            CnpValidationError::InvalidSequenceError => "sequence",
            CnpValidationError::InvalidChecksumError => "checksum",
        }
    }
}

impl From<CnpValidationError> for i64 {
    fn from(value: CnpValidationError) -> i64 {
        match value {
            CnpValidationError::FormatError => -1,
            CnpValidationError::InvalidDateError => -2,
            CnpValidationError::InvalidRegionError => -3,
            CnpValidationError::InvalidSequenceError => -4,
            CnpValidationError::InvalidChecksumError => -5,
        }
    }
}
