use crate::checks::{number, region_name, CONTROL, REGION, SELECTOR, SEQUENCE};
use crate::error::CnpValidationError;
use crate::validation::validate_and_get_birth_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    /// Foreign non-residents (S = 9) carry no gender
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residency {
    Resident,
    ForeignResident,
    ForeignNonResident,
}

/// The JJ field of a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region(u8);

impl Region {
    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn name(&self) -> Option<&'static str> {
        region_name(self.0 as u32)
    }
}

/// A Romanian personal numeric code that passed every check.
///
/// The only way to get one is through [Cnp::parse] (or `FromStr` / `TryFrom`), so the
/// accessors never have to deal with malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnp {
    code: String,
    birth_date: NaiveDate,
}

impl Cnp {
    pub fn parse(code: &str) -> Result<Self, CnpValidationError> {
        let birth_date = validate_and_get_birth_date(code)?;
        Ok(Cnp {
            code: code.to_owned(),
            birth_date,
        })
    }

    fn selector(&self) -> u8 {
        self.code.as_bytes()[SELECTOR]
    }

    pub fn gender(&self) -> Gender {
        match self.selector() {
            b'9' => Gender::Unspecified,
            s if s % 2 == 1 => Gender::Male,
            _ => Gender::Female,
        }
    }

    pub fn residency(&self) -> Residency {
        match self.selector() {
            b'7' | b'8' => Residency::ForeignResident,
            b'9' => Residency::ForeignNonResident,
            _ => Residency::Resident,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn region(&self) -> Region {
        Region(number(&self.code.as_bytes()[REGION]) as u8)
    }

    pub fn sequence(&self) -> u16 {
        number(&self.code.as_bytes()[SEQUENCE]) as u16
    }

    pub fn control_digit(&self) -> u8 {
        self.code.as_bytes()[CONTROL] - b'0'
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }
}

impl Display for Cnp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Cnp {
    type Err = CnpValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cnp::parse(s)
    }
}

impl TryFrom<&str> for Cnp {
    type Error = CnpValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Cnp::parse(value)
    }
}

impl TryFrom<String> for Cnp {
    type Error = CnpValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cnp::parse(&value)
    }
}

impl From<Cnp> for String {
    fn from(value: Cnp) -> String {
        value.code
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_fields() {
        let cnp = Cnp::parse("1800101139231").unwrap();
        assert_eq!(cnp.gender(), Gender::Male);
        assert_eq!(cnp.residency(), Residency::Resident);
        assert_eq!(cnp.birth_date(), date(1980, 1, 1));
        assert_eq!(cnp.region().code(), 13);
        assert_eq!(cnp.region().name(), Some("Constanța"));
        assert_eq!(cnp.sequence(), 923);
        assert_eq!(cnp.control_digit(), 1);
        assert_eq!(cnp.as_str(), "1800101139231");
        assert_eq!(cnp.to_string(), "1800101139231");
    }

    #[test]
    fn decodes_selector() {
        let cnp: Cnp = "6120131011233".parse().unwrap();
        assert_eq!(cnp.gender(), Gender::Female);
        assert_eq!(cnp.residency(), Residency::Resident);
        assert_eq!(cnp.birth_date(), date(2012, 1, 31));
        assert_eq!(cnp.region().name(), Some("Alba"));

        let cnp = Cnp::try_from("5031226529994").unwrap();
        assert_eq!(cnp.gender(), Gender::Male);
        assert_eq!(cnp.birth_date(), date(2003, 12, 26));
        assert_eq!(cnp.region().name(), Some("Giurgiu"));
        assert_eq!(cnp.sequence(), 999);
    }

    #[test]
    fn rejects_invalid_codes() {
        assert_eq!(
            Cnp::parse("1800101139232"),
            Err(CnpValidationError::InvalidChecksumError)
        );
        assert_eq!(
            "180010113923".parse::<Cnp>(),
            Err(CnpValidationError::FormatError)
        );
        assert_eq!(
            Cnp::try_from("1800101139230".to_string()),
            Err(CnpValidationError::InvalidChecksumError)
        );
    }

    #[test]
    fn serializes_as_string() {
        let cnp = Cnp::parse("1800101139231").unwrap();
        assert_tokens(&cnp, &[Token::Str("1800101139231")]);
        assert_de_tokens_error::<Cnp>(
            &[Token::Str("1800101139232")],
            "invalid control digit in CNP",
        );
    }

    #[test]
    fn gender_and_residency_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&Residency::ForeignNonResident).unwrap(),
            "\"foreign_non_resident\""
        );
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
