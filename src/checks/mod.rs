//! The individual checks a CNP goes through. Every check after [format] works on the
//! raw bytes of a code that already passed the format check.

mod birth_date;
mod control_digit;
mod format;
mod region;
mod sequence;

pub use birth_date::birth_date;
pub use control_digit::{check_control_digit, control_digit, CHECKSUM_WEIGHTS};
pub use format::check_format;
pub use region::{check_region, region_name};
pub use sequence::check_sequence;

use std::ops::Range;

pub const CNP_LENGTH: usize = 13;

pub(crate) const SELECTOR: usize = 0;
pub(crate) const YEAR: Range<usize> = 1..3;
pub(crate) const MONTH: Range<usize> = 3..5;
pub(crate) const DAY: Range<usize> = 5..7;
pub(crate) const REGION: Range<usize> = 7..9;
pub(crate) const SEQUENCE: Range<usize> = 9..12;
pub(crate) const CONTROL: usize = 12;

/// Numeric value of an ASCII digit byte.
#[inline]
fn digit_value(byte: u8) -> u32 {
    (byte - b'0') as u32
}

/// Decimal value of a run of ASCII digit bytes
pub(crate) fn number(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, d| acc * 10 + digit_value(*d))
}
