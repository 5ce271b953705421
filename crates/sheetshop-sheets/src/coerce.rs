//! Permissive conversions from raw sheet cells to typed values.
//!
//! A missing cell and an empty (or blank) cell are treated the same way:
//! each function falls back to its default instead of failing.

use thiserror::Error;

/// A cell that should have held a number but did not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{value}\" is not a number")]
pub struct CoerceError {
    pub value: String,
}

const TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];

/// `true` only for `true`, `1`, `yes` or `y` (case-insensitive, trimmed).
#[must_use]
pub fn parse_bool(value: Option<&str>) -> bool {
    value.is_some_and(|v| TRUTHY.contains(&v.trim().to_lowercase().as_str()))
}

/// Parses a whole number, truncating any fractional part toward zero, so
/// `"3.9"` becomes `3` and `"-2.5"` becomes `-2`.
///
/// # Errors
///
/// Returns [`CoerceError`] if the cell is not numeric or is out of range.
pub fn parse_int(value: Option<&str>, default: i64) -> Result<i64, CoerceError> {
    let Some(raw) = non_blank(value) else {
        return Ok(default);
    };
    let truncated = parse_finite(raw)?.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    #[allow(clippy::cast_precision_loss)]
    let in_range = truncated >= i64::MIN as f64 && truncated < i64::MAX as f64;
    if !in_range {
        return Err(not_a_number(raw));
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = truncated as i64;
    Ok(whole)
}

/// Parses a decimal number.
///
/// # Errors
///
/// Returns [`CoerceError`] if the cell is not a finite number.
pub fn parse_float(value: Option<&str>, default: f64) -> Result<f64, CoerceError> {
    match non_blank(value) {
        Some(raw) => parse_finite(raw),
        None => Ok(default),
    }
}

/// Splits a comma-separated tag list, trimming each tag and dropping empties.
#[must_use]
pub fn parse_tags(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Trimmed cell text, or an empty string when the cell is missing.
#[must_use]
pub fn text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_finite(raw: &str) -> Result<f64, CoerceError> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| not_a_number(raw))
}

fn not_a_number(raw: &str) -> CoerceError {
    CoerceError {
        value: raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_truthy_spellings() {
        for v in ["true", "TRUE", " Yes ", "y", "1"] {
            assert!(parse_bool(Some(v)), "{v:?} should be true");
        }
    }

    #[test]
    fn parse_bool_is_false_for_everything_else() {
        assert!(!parse_bool(None));
        assert!(!parse_bool(Some("")));
        for v in ["no", "0", "false", "available", "2"] {
            assert!(!parse_bool(Some(v)), "{v:?} should be false");
        }
    }

    #[test]
    fn parse_int_truncates_instead_of_rounding() {
        assert_eq!(parse_int(Some("3.9"), 0), Ok(3));
        assert_eq!(parse_int(Some("3.7"), 0), Ok(3));
        assert_eq!(parse_int(Some("-2.5"), 0), Ok(-2));
        assert_eq!(parse_int(Some(" 12 "), 0), Ok(12));
    }

    #[test]
    fn parse_int_uses_default_for_blank_cells() {
        assert_eq!(parse_int(None, 4), Ok(4));
        assert_eq!(parse_int(Some(""), 4), Ok(4));
        assert_eq!(parse_int(Some("   "), 4), Ok(4));
    }

    #[test]
    fn parse_int_rejects_non_numeric() {
        assert_eq!(
            parse_int(Some("two"), 0),
            Err(CoerceError {
                value: "two".to_owned()
            })
        );
        assert!(parse_int(Some("inf"), 0).is_err());
        assert!(parse_int(Some("1e30"), 0).is_err());
    }

    #[test]
    fn parse_float_handles_defaults_and_values() {
        assert_eq!(parse_float(Some(""), 5.0), Ok(5.0));
        assert_eq!(parse_float(None, 5.0), Ok(5.0));
        assert_eq!(parse_float(Some("12.75"), 0.0), Ok(12.75));
        assert_eq!(parse_float(Some("1e2"), 0.0), Ok(100.0));
    }

    #[test]
    fn parse_float_rejects_non_numeric() {
        assert!(parse_float(Some("Rs. 40"), 0.0).is_err());
        assert!(parse_float(Some("NaN"), 0.0).is_err());
    }

    #[test]
    fn parse_tags_splits_trims_and_drops_empties() {
        assert_eq!(parse_tags(Some("a, b,,c")), vec!["a", "b", "c"]);
        assert_eq!(parse_tags(Some(" , ")), Vec::<String>::new());
        assert!(parse_tags(None).is_empty());
        assert!(parse_tags(Some("")).is_empty());
    }

    #[test]
    fn text_trims_or_defaults_to_empty() {
        assert_eq!(text(Some("  hi  ")), "hi");
        assert_eq!(text(None), "");
    }
}
