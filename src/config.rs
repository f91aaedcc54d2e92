use crate::observability::labels::Labels;
use crate::validator::CnpValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Which rules a [CnpValidator] enforces
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationLevel {
    /// Format, birth date, region, sequence and control digit
    #[default]
    Full,
    /// Format and control digit only
    ChecksumOnly,
}

#[derive(Debug, Error)]
pub enum ValidatorConfigError {
    #[error("Invalid validator configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CnpValidatorConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub level: ValidationLevel,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl CnpValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ValidatorConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level(&self, level: ValidationLevel) -> Self {
        self.mutate_clone(|x| x.level = level)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> CnpValidator {
        CnpValidator::new(self.level, &self.labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn should_have_default() {
        assert_eq!(
            CnpValidatorConfig::new(),
            CnpValidatorConfig {
                level: ValidationLevel::Full,
                labels: Labels::empty(),
            }
        );
    }

    #[test]
    fn should_override_level() {
        let config = CnpValidatorConfig::new().level(ValidationLevel::ChecksumOnly);
        assert_eq!(config.level, ValidationLevel::ChecksumOnly);
        assert!(config.labels.is_empty());
    }

    #[test]
    fn should_parse_json() {
        let config = CnpValidatorConfig::from_json(
            r#"{"level": "checksum_only", "labels": {"service": "onboarding"}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            CnpValidatorConfig::new()
                .level(ValidationLevel::ChecksumOnly)
                .labels(Labels::new(&[("service", "onboarding")]))
        );
    }

    #[test]
    fn null_and_missing_fields_use_defaults() {
        assert_eq!(
            CnpValidatorConfig::from_json(r#"{"level": null, "labels": null}"#).unwrap(),
            CnpValidatorConfig::default()
        );
        assert_eq!(
            CnpValidatorConfig::from_json("{}").unwrap(),
            CnpValidatorConfig::default()
        );
    }

    #[test]
    fn should_reject_unknown_level() {
        let err = CnpValidatorConfig::from_json(r#"{"level": "lenient"}"#).unwrap_err();
        assert!(matches!(err, ValidatorConfigError::InvalidJson(_)));
    }

    #[test]
    fn level_names_match_serde() {
        for level in ValidationLevel::iter() {
            let name: &'static str = level.into();
            assert_eq!(ValidationLevel::from_str(name).unwrap(), level);
            assert_eq!(level.to_string(), name);
            assert_eq!(serde_json::to_string(&level).unwrap(), format!("\"{name}\""));
        }
    }
}
