use crate::checks::CNP_LENGTH;
use crate::error::CnpValidationError;

/// Requires exactly 13 bytes, all of them ASCII `0`-`9`.
///
/// `char::is_numeric` would accept other scripts' numerals, and `len()` counts bytes,
/// so the check works on bytes: any multi-byte character fails one way or the other.
pub fn check_format(code: &str) -> Result<(), CnpValidationError> {
    let bytes = code.as_bytes();
    if bytes.len() != CNP_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(CnpValidationError::FormatError);
    }
    Ok(())
}
