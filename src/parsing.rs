//! Convert ENDF-6 fields into numbers.
//!
//! An ENDF-6 record packs six 11-character fields into each 80-column line,
//! and the numbers inside those fields take some liberties: blanks may appear
//! anywhere (including the whole field being blank, which means zero), the
//! exponent marker may be `e`, `E`, `d`, or `D`, and most files omit the
//! marker entirely, leaving just the exponent's sign (`-2.225002+6`).
//! [`parse_float`] normalizes all of that into something the standard float
//! parser accepts:
//!
//! ```
//! use endf_fields::parsing::parse_float;
//! assert_eq!(parse_float("-2.225002+6"), -2.225002e6);
//! assert_eq!(parse_float("1.0D+01"), 10.0);
//! assert_eq!(parse_float("           "), 0.0);
//! ```
use arrayvec::ArrayVec;

use crate::endf_error::{EError, EResult};

/// The width of one ENDF-6 field, in characters.
pub const ENDF_FIELD_WIDTH: usize = 11;

/// Worst case for a normalized numeral: a full field plus one inserted `e`.
const NUMERAL_CAPACITY: usize = ENDF_FIELD_WIDTH + 1;

/// Converts an ENDF-6 floating point field into an `f64`.
///
/// Only the first 11 bytes of `field` are consulted; anything past that is
/// ignored, matching the fixed field width. Blank characters are skipped
/// wherever they occur. Once digits (or a decimal point) have started, a bare
/// `+` or `-` is taken as the start of an exponent and an `e` is inserted in
/// front of it, while an explicit `e`/`E`/`d`/`D` marker is rewritten to `e`.
/// A sign *before* any digit is an ordinary sign on the number itself.
///
/// This function never fails. A blank or empty field, or anything the float
/// parser still rejects after normalization (including non-UTF-8 leftovers
/// from the byte truncation), comes back as 0.0.
pub fn parse_float(field: &str) -> f64 {
    // 11 source bytes plus at most one synthetic marker; the fixed capacity
    // makes overflowing the scratch buffer impossible.
    let mut numeral: ArrayVec<u8, NUMERAL_CAPACITY> = ArrayVec::new();
    let mut found_significand = false;
    let mut found_exponent = false;

    for c in field.bytes().take(ENDF_FIELD_WIDTH) {
        if c == b' ' {
            continue;
        }
        if found_significand {
            if !found_exponent {
                match c {
                    // sign with the marker letter omitted: supply the marker
                    b'+' | b'-' => {
                        numeral.push(b'e');
                        found_exponent = true;
                    },
                    b'e' | b'E' | b'd' | b'D' => {
                        numeral.push(b'e');
                        found_exponent = true;
                        continue;
                    },
                    _ => (),
                }
            }
        } else if c == b'.' || c.is_ascii_digit() {
            found_significand = true;
        }
        numeral.push(c);
    }

    std::str::from_utf8(&numeral)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0)
}

/// Converts an ENDF-6 integer field into an `i64`.
///
/// ENDF-6 allows an integer field to be entirely blank, which reads as zero.
/// Anything else must be a plain decimal integer once the surrounding blanks
/// are stripped; unlike [`parse_float`] there is no leniency beyond that, so
/// a malformed field is reported as an error. That includes the empty
/// string: blank-as-zero applies to a field of blanks, not the absence of a
/// field.
pub fn parse_int(field: &str) -> EResult<i64> {
    let digits = field.trim();
    if digits.is_empty() && !field.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|e: std::num::ParseIntError| EError::ParsingError {
        s: field.to_string(),
        t: "integer",
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_near(s: &str, expected: f64) {
        let got = parse_float(s);
        let tol = EPSILON * expected.abs().max(1.0);
        assert!((got - expected).abs() < tol, "parse_float({s:?}) gave {got}, expected {expected}");
    }

    #[test]
    fn test_float_sign() {
        assert_near("+3.2146", 3.2146);
        assert_near("-2.225002+6", -2.225002e6);
    }

    #[test]
    fn test_float_no_leading_digit() {
        assert_near(".12345", 0.12345);
    }

    #[test]
    fn test_float_double_digit_exponent() {
        assert_near("6.022+23", 6.022e23);
        assert_near("6.022-23", 6.022e-23);
        assert_near("6.023000+23", 6.023e23);
    }

    #[test]
    fn test_float_whitespace() {
        assert_near(" +1.01+ 2", 101.0);
        assert_near(" -1.01- 2", -0.0101);
        assert_near("+ 2 . 3+ 1", 23.0);
        assert_near("-7 .8 -1", -0.78);
        // interior blanks never matter
        assert_eq!(parse_float("1.0 +1"), parse_float("1.0+1"));
    }

    #[test]
    fn test_float_e_exponent() {
        assert_near("3.14e0", 3.14);
        assert_near("3.14E0", 3.14);
        assert_near("3.14e-1", 0.314);
        assert_near(" 1.234560+2", 123.456);
        assert_near("1.23000-03", 0.00123);
    }

    #[test]
    fn test_float_d_exponent() {
        assert_near("3.14d0", 3.14);
        assert_near("3.14D0", 3.14);
        assert_near("3.14d-1", 0.314);
        assert_near("1.0D+01", 10.0);
        assert_near("1.0d+01", 10.0);
    }

    #[test]
    fn test_float_only_leading_digit() {
        assert_near("1+2", 100.0);
        assert_near("-1+2", -100.0);
        assert_near("1.+2", 100.0);
        assert_near("-1.+2", -100.0);
    }

    #[test]
    fn test_float_blank() {
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float(" "), 0.0);
        assert_eq!(parse_float("        "), 0.0);
        assert_eq!(parse_float("           "), 0.0);
    }

    #[test]
    fn test_float_field_width() {
        // only the first 11 characters count
        assert_near("9.876540000000000", 9.87654);
        let long = "1.234560+2 garbage after the field";
        assert_eq!(parse_float(long), parse_float(&long[..ENDF_FIELD_WIDTH]));
    }

    #[test]
    fn test_float_truncation_splits_multibyte_char() {
        // the 11-byte cutoff lands in the middle of the two-byte 'é',
        // leaving a non-UTF-8 numeral, which reads as zero
        assert_eq!(parse_float("1234567890\u{e9}"), 0.0);
    }

    #[test]
    fn test_float_malformed() {
        // leniency bottoms out at the stdlib float parser; whatever it
        // rejects reads as zero
        assert_eq!(parse_float("abc"), 0.0);
        assert_eq!(parse_float("1.2.3.4"), 0.0);
        assert_eq!(parse_float("+-"), 0.0);
    }

    #[test]
    fn test_int() {
        assert_eq!(parse_int("          1").unwrap(), 1);
        assert_eq!(parse_int("       9228").unwrap(), 9228);
        assert_eq!(parse_int("-12").unwrap(), -12);
        assert_eq!(parse_int("+5").unwrap(), 5);
    }

    #[test]
    fn test_int_blank() {
        assert_eq!(parse_int(" ").unwrap(), 0);
        assert_eq!(parse_int("           ").unwrap(), 0);
    }

    #[test]
    fn test_int_malformed() {
        assert!(parse_int("1.5").is_err());
        assert!(parse_int("twelve").is_err());
        // a blank field is zero, but no field at all is not a number
        assert!(parse_int("").is_err());
    }
}
