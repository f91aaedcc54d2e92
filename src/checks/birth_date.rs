use crate::checks::{digit_value, number, DAY, MONTH, SELECTOR, YEAR};
use crate::error::CnpValidationError;
use chrono::NaiveDate;

/// Century of the birth year, indexed by the selector digit S.
/// Foreign residents (7, 8) and non-residents (9) are always mapped to the 1900s.
const CENTURIES: [Option<i32>; 10] = [
    None,
    Some(19),
    Some(19),
    Some(18),
    Some(18),
    Some(20),
    Some(20),
    Some(19),
    Some(19),
    Some(19),
];

/// Century for a selector digit, `None` for 0 or anything that is not a digit.
fn century(selector: u8) -> Option<i32> {
    if !selector.is_ascii_digit() {
        return None;
    }
    CENTURIES[digit_value(selector) as usize]
}

/// Reconstructs the birth date of a well-formed code.
///
/// The date has to exist in the proleptic Gregorian calendar: month 00, day 00,
/// April 31st or February 29th of a non-leap year are rejected rather than rolled over.
pub fn birth_date(code: &[u8]) -> Result<NaiveDate, CnpValidationError> {
    let century = century(code[SELECTOR]).ok_or(CnpValidationError::InvalidDateError)?;
    let year = century * 100 + number(&code[YEAR]) as i32;

    NaiveDate::from_ymd_opt(year, number(&code[MONTH]), number(&code[DAY]))
        .ok_or(CnpValidationError::InvalidDateError)
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn century_mapping() {
        assert_eq!(birth_date(b"1800101000000"), Ok(date(1980, 1, 1)));
        assert_eq!(birth_date(b"2800101000000"), Ok(date(1980, 1, 1)));
        assert_eq!(birth_date(b"5010101000000"), Ok(date(2001, 1, 1)));
        assert_eq!(birth_date(b"6010101000000"), Ok(date(2001, 1, 1)));
        assert_eq!(birth_date(b"3991231000000"), Ok(date(1899, 12, 31)));
        assert_eq!(birth_date(b"4991231000000"), Ok(date(1899, 12, 31)));
        for selector in [b'7', b'8', b'9'] {
            let mut code = *b"0850312000000";
            code[0] = selector;
            assert_eq!(birth_date(&code), Ok(date(1985, 3, 12)));
        }
    }

    #[test]
    fn selector_zero_has_no_century() {
        assert_eq!(century(b'0'), None);
        assert_eq!(century(b'a'), None);
        assert_eq!(
            birth_date(b"0800101000000"),
            Err(CnpValidationError::InvalidDateError)
        );
    }

    #[test]
    fn leap_years() {
        // 1984 and 2000 are leap years, 1981 and 1900 are not
        assert_eq!(birth_date(b"1840229000000"), Ok(date(1984, 2, 29)));
        assert_eq!(birth_date(b"5000229000000"), Ok(date(2000, 2, 29)));
        assert_eq!(
            birth_date(b"1810229000000"),
            Err(CnpValidationError::InvalidDateError)
        );
        assert_eq!(
            birth_date(b"1000229000000"),
            Err(CnpValidationError::InvalidDateError)
        );
    }

    #[test]
    fn impossible_dates() {
        let invalid = [
            "1800230000000", // Feb 30
            "5030431000000", // April 31
            "3880015000000", // month 00
            "2990500000000", // day 00
            "1801301000000", // month 13
            "1800132000000", // day 32
        ];
        for code in invalid {
            assert_eq!(
                birth_date(code.as_bytes()),
                Err(CnpValidationError::InvalidDateError),
                "{code}"
            );
        }
    }
}
