use crate::config::ValidationLevel;
use crate::error::CnpValidationError;
use crate::observability::labels::Labels;
use crate::observability::metrics::ValidationMetrics;
use crate::secondary_validation::Validator;
use crate::validation::{validate, validate_checksum};

/// A configured validator reporting every result through `metrics`.
///
/// Holds no state besides its counter handles, so it can be shared between threads.
pub struct CnpValidator {
    level: ValidationLevel,
    metrics: ValidationMetrics,
}

impl CnpValidator {
    pub fn new(level: ValidationLevel, labels: &Labels) -> Self {
        CnpValidator {
            level,
            metrics: ValidationMetrics::new(labels),
        }
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    pub fn validate(&self, code: &str) -> Result<(), CnpValidationError> {
        let result = match self.level {
            ValidationLevel::Full => validate(code),
            ValidationLevel::ChecksumOnly => validate_checksum(code),
        };
        self.metrics.record(&result);
        result
    }
}

impl Default for CnpValidator {
    fn default() -> Self {
        CnpValidator::new(ValidationLevel::default(), &Labels::empty())
    }
}

impl Validator for CnpValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}
