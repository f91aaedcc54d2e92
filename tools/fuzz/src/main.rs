use afl::fuzz;
use ro_cnp::{control_digit, validate, validate_checksum, Cnp, CnpValidationError};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let result = validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Result: {:?}", result);
    }

    // same outcome through every entry point
    assert_eq!(result, validate(input));
    assert_eq!(result, Cnp::parse(input).map(|_| ()));

    match validate_checksum(input) {
        Err(CnpValidationError::FormatError) => {
            assert_eq!(result, Err(CnpValidationError::FormatError))
        }
        Err(CnpValidationError::InvalidChecksumError) => assert!(result.is_err()),
        Err(other) => panic!("unexpected checksum-only error {other:?}"),
        Ok(()) => {
            assert_ne!(result, Err(CnpValidationError::InvalidChecksumError));
            let expected = control_digit(&input[..12]).unwrap();
            assert_eq!(input[12..].parse::<u32>().ok(), Some(expected));
        }
    }
}
