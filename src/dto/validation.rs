//! Validation helpers for DTOs.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use validator::ValidationError;

/// Validates that a display color is a `#rrggbb` hex triplet.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#d80e61") // Ok
/// validate_hex_color("d80e61")  // Err - missing '#'
/// validate_hex_color("#d80e6")  // Err - too short
/// ```
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let hex = match color.strip_prefix('#') {
        Some(hex) => hex,
        None => {
            let mut err = ValidationError::new("color_format");
            err.message = Some("Color must start with '#'".into());
            return Err(err);
        }
    };

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("color_format");
        err.message = Some("Color must be a 6-digit hex triplet like #d80e61".into());
        return Err(err);
    }

    Ok(())
}

/// Validates and parses an RFC 3339 timestamp string.
pub fn parse_rfc3339(value: &str) -> Result<OffsetDateTime, ValidationError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|_| {
        let mut err = ValidationError::new("timestamp_format");
        err.message =
            Some(format!("`{value}` is not an RFC 3339 timestamp (e.g. 2025-10-11T10:00:00+01:00)").into());
        err
    })
}

/// Validator-compatible wrapper around [`parse_rfc3339`].
pub fn validate_rfc3339(value: &str) -> Result<(), ValidationError> {
    parse_rfc3339(value).map(|_| ())
}

/// Validates the half number (a game has exactly two halves).
pub fn validate_half(half: i64) -> Result<(), ValidationError> {
    if !(1..=2).contains(&half) {
        let mut err = ValidationError::new("half_range");
        err.message = Some(format!("Half must be 1 or 2 (got {half})").into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color_valid() {
        assert!(validate_hex_color("#d80e61").is_ok());
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("#C0C0C0").is_ok());
    }

    #[test]
    fn test_validate_hex_color_invalid() {
        assert!(validate_hex_color("d80e61").is_err()); // missing '#'
        assert!(validate_hex_color("#d80e6").is_err()); // too short
        assert!(validate_hex_color("#d80e611").is_err()); // too long
        assert!(validate_hex_color("#d80e6g").is_err()); // invalid hex
        assert!(validate_hex_color("").is_err()); // empty
    }

    #[test]
    fn test_parse_rfc3339() {
        assert!(parse_rfc3339("2025-10-11T10:00:00+01:00").is_ok());
        assert!(parse_rfc3339("2025-10-11T09:00:00Z").is_ok());
        assert!(parse_rfc3339("2025-10-11 10:00").is_err());
        assert!(parse_rfc3339("next saturday").is_err());
    }

    #[test]
    fn test_validate_half() {
        assert!(validate_half(1).is_ok());
        assert!(validate_half(2).is_ok());
        assert!(validate_half(0).is_err());
        assert!(validate_half(3).is_err());
    }
}
