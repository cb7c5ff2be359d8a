//! Parameter token decoding.
//!
//! IGES files written by Fortran preprocessors use `D` exponent markers in
//! real numbers (`1.5D+02`). Tokens may also carry column padding from
//! record continuation, so every parse trims first.

use crate::error::{IgesError, Result};

/// Parse a real-number token, accepting Fortran `D`/`d` exponents.
///
/// The standard float parse is tried first; on failure the exponent marker
/// is normalized to `E`/`e` and the parse retried. A token that fails both
/// attempts is a fatal [`IgesError::MalformedNumber`], never a silent zero.
pub fn parse_real(token: &str) -> Result<f64> {
    let trimmed = token.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(value);
    }
    trimmed
        .replace('D', "E")
        .replace('d', "e")
        .parse::<f64>()
        .map_err(|_| IgesError::MalformedNumber {
            token: token.to_string(),
        })
}

/// Parse an integer token.
pub fn parse_int(token: &str) -> Result<i32> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| IgesError::MalformedNumber {
            token: token.to_string(),
        })
}

/// Parse a fixed-width directory field that may be entirely blank.
///
/// Blank-padded optional fields decode as 0; non-blank garbage is still
/// [`IgesError::MalformedNumber`].
pub fn parse_int_field(field: &str) -> Result<i32> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    parse_int(trimmed)
}

/// Decode a Hollerith-encoded string token (`<count>H<text>`).
///
/// The decode is tolerant: the count prefix is not validated against the
/// text length (line stripping during accumulation can shorten either),
/// and a token without a well-formed prefix is returned trimmed as-is.
pub fn decode_hollerith(token: &str) -> String {
    let trimmed = token.trim();
    match trimmed.split_once('H') {
        Some((count, text)) if !count.is_empty() && count.chars().all(|c| c.is_ascii_digit()) => {
            text.to_string()
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real_plain() {
        assert_eq!(parse_real("1.5").unwrap(), 1.5);
        assert_eq!(parse_real("-0.25").unwrap(), -0.25);
        assert_eq!(parse_real("1.5E+02").unwrap(), 150.0);
        assert_eq!(parse_real("  2.0  ").unwrap(), 2.0);
        assert_eq!(parse_real(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_real_fortran_exponent() {
        assert_eq!(parse_real("1.5D+02").unwrap(), 150.0);
        assert_eq!(parse_real("1.5d-01").unwrap(), 0.15);
        assert_eq!(parse_real("-3.25D0").unwrap(), -3.25);
    }

    #[test]
    fn test_parse_real_rejects_garbage() {
        assert!(matches!(
            parse_real("banana"),
            Err(IgesError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_real(""),
            Err(IgesError::MalformedNumber { .. })
        ));
        assert!(matches!(
            parse_real("1. 5"),
            Err(IgesError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("126").unwrap(), 126);
        assert_eq!(parse_int("  -3 ").unwrap(), -3);
        assert!(parse_int("3.0").is_err());
        assert!(parse_int("").is_err());
    }

    #[test]
    fn test_parse_int_field_blank_is_zero() {
        assert_eq!(parse_int_field("        ").unwrap(), 0);
        assert_eq!(parse_int_field("      12").unwrap(), 12);
        assert!(parse_int_field("      xx").is_err());
    }

    #[test]
    fn test_decode_hollerith() {
        assert_eq!(decode_hollerith("4HINCH"), "INCH");
        assert_eq!(decode_hollerith("  13H870810.122645"), "870810.122645");
        // Text containing H: only the prefix H splits.
        assert_eq!(decode_hollerith("6HHANDLE"), "HANDLE");
        // No usable prefix: keep the token.
        assert_eq!(decode_hollerith("INCH"), "INCH");
        assert_eq!(decode_hollerith("xH1"), "xH1");
        assert_eq!(decode_hollerith(""), "");
    }
}
