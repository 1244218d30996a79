//! Fixed-point geographic coordinates.
//!
//! Latitude and longitude travel through the program as `i64` degrees scaled
//! by [`COORDINATE_SCALE`], so a stored value is always bit-for-bit the value
//! the scanner submitted.

use anchor_lang::prelude::*;

use crate::{
    constants::{
        COORDINATE_DECIMALS, COORDINATE_SCALE, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE,
        MIN_LONGITUDE,
    },
    errors::ErrorCode,
};

/// Check a coordinate pair against the geographic range.
/// Bounds are inclusive; longitude is only checked once latitude passed.
pub fn validate(latitude: i64, longitude: i64) -> Result<()> {
    require!(
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude),
        ErrorCode::InvalidLatitude
    );
    require!(
        (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude),
        ErrorCode::InvalidLongitude
    );
    Ok(())
}

/// Parse a decimal degree string such as `"-74.006"` into fixed point.
///
/// Returns `None` for anything that cannot be represented exactly: more than
/// [`COORDINATE_DECIMALS`] fractional digits, stray characters, or overflow.
pub fn parse_degrees(input: &str) -> Option<i64> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > COORDINATE_DECIMALS {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole_value: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut fraction_value: i64 = if fraction.is_empty() { 0 } else { fraction.parse().ok()? };
    for _ in fraction.len()..COORDINATE_DECIMALS {
        fraction_value *= 10;
    }

    let magnitude = whole_value
        .checked_mul(COORDINATE_SCALE)?
        .checked_add(fraction_value)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Render fixed-point degrees as the shortest exact decimal string.
pub fn format_degrees(value: i64) -> String {
    let scale = COORDINATE_SCALE.unsigned_abs();
    let magnitude = value.unsigned_abs();
    let sign = if value < 0 { "-" } else { "" };
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    if fraction == 0 {
        return format!("{sign}{whole}");
    }
    let digits = format!("{fraction:0width$}", width = COORDINATE_DECIMALS);
    format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(input: &str) -> i64 {
        parse_degrees(input).unwrap()
    }

    fn code(error: ErrorCode) -> anchor_lang::error::Error {
        error.into()
    }

    #[test]
    fn accepts_inclusive_bounds() {
        assert!(validate(MIN_LATITUDE, MIN_LONGITUDE).is_ok());
        assert!(validate(MAX_LATITUDE, MAX_LONGITUDE).is_ok());
        assert!(validate(0, 0).is_ok());
        assert!(validate(degrees("35.6895"), degrees("139.6917")).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = validate(degrees("200.0"), degrees("139.6917")).unwrap_err();
        assert_eq!(err, code(ErrorCode::InvalidLatitude));

        let err = validate(MIN_LATITUDE - 1, 0).unwrap_err();
        assert_eq!(err, code(ErrorCode::InvalidLatitude));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = validate(degrees("35.6895"), degrees("200.0")).unwrap_err();
        assert_eq!(err, code(ErrorCode::InvalidLongitude));

        let err = validate(0, MAX_LONGITUDE + 1).unwrap_err();
        assert_eq!(err, code(ErrorCode::InvalidLongitude));
    }

    #[test]
    fn latitude_is_reported_before_longitude() {
        let err = validate(degrees("-91"), degrees("181")).unwrap_err();
        assert_eq!(err, code(ErrorCode::InvalidLatitude));
    }

    #[test]
    fn parses_decimal_strings_exactly() {
        assert_eq!(parse_degrees("35.6895"), Some(356_895_000));
        assert_eq!(parse_degrees("-74.006"), Some(-740_060_000));
        assert_eq!(parse_degrees("+90"), Some(MAX_LATITUDE));
        assert_eq!(parse_degrees("-.5"), Some(-5_000_000));
        assert_eq!(parse_degrees("12.3456789"), Some(123_456_789));
    }

    #[test]
    fn refuses_lossy_or_malformed_input() {
        assert_eq!(parse_degrees(""), None);
        assert_eq!(parse_degrees("-"), None);
        assert_eq!(parse_degrees("."), None);
        assert_eq!(parse_degrees("1.23456789"), None);
        assert_eq!(parse_degrees("1e3"), None);
        assert_eq!(parse_degrees("--1"), None);
        assert_eq!(parse_degrees("99999999999999999999"), None);
    }

    #[test]
    fn formats_shortest_decimal() {
        assert_eq!(format_degrees(356_895_000), "35.6895");
        assert_eq!(format_degrees(-740_060_000), "-74.006");
        assert_eq!(format_degrees(MAX_LATITUDE), "90");
        assert_eq!(format_degrees(-5_000_000), "-0.5");
        assert_eq!(format_degrees(0), "0");
        assert_eq!(format_degrees(1), "0.0000001");
    }

    #[test]
    fn format_inverts_parse() {
        for input in ["35.6896", "139.6918", "-33.8688", "151.2093", "0.0000001"] {
            assert_eq!(format_degrees(degrees(input)), input);
        }
    }
}
