use crate::error::CnpValidationError;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

const VALIDATIONS: &str = "cnp.validations";
const RESULT: &str = "result";

/// Counter handles for one validator, registered once at construction.
pub struct ValidationMetrics {
    pub valid: Counter,
    pub format_errors: Counter,
    pub date_errors: Counter,
    pub region_errors: Counter,
    pub sequence_errors: Counter,
    pub checksum_errors: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        let with_result = |result: &'static str| {
            counter!(VALIDATIONS, labels.clone_with_labels(&[(RESULT, result)]))
        };

        ValidationMetrics {
            valid: with_result("valid"),
            format_errors: with_result(CnpValidationError::FormatError.kind()),
            date_errors: with_result(CnpValidationError::InvalidDateError.kind()),
            region_errors: with_result(CnpValidationError::InvalidRegionError.kind()),
            sequence_errors: with_result(CnpValidationError::InvalidSequenceError.kind()),
            checksum_errors: with_result(CnpValidationError::InvalidChecksumError.kind()),
        }
    }

    pub fn record(&self, result: &Result<(), CnpValidationError>) {
        let counter = match result {
            Ok(()) => &self.valid,
            Err(CnpValidationError::FormatError) => &self.format_errors,
            Err(CnpValidationError::InvalidDateError) => &self.date_errors,
            Err(CnpValidationError::InvalidRegionError) => &self.region_errors,
            Err(CnpValidationError::InvalidSequenceError) => &self.sequence_errors,
            Err(CnpValidationError::InvalidChecksumError) => &self.checksum_errors,
        };
        counter.increment(1);
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        ValidationMetrics::new(&NO_LABEL)
    }
}
