//! Argument domain checks shared by the entry points.
//!
//! Out-of-range values are rejected, never silently clamped: the
//! entry point logs the validation error and returns its documented
//! fallback.

use super::error::BoundaryError;

/// Positions live in `[0, 1]` inclusive.
pub fn position(value: f64, op: &'static str, name: &str) -> Result<(), BoundaryError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(BoundaryError::Validation {
            op,
            message: format!("invalid {name} position: {value} (must be between 0 and 1)"),
        });
    }
    Ok(())
}

/// Sizes, paddings, and margins are non-negative.
pub fn dimension(value: i32, op: &'static str, name: &str) -> Result<(), BoundaryError> {
    if value < 0 {
        return Err(BoundaryError::Validation {
            op,
            message: format!("invalid {name}: {value} (must be non-negative)"),
        });
    }
    Ok(())
}

/// Color literals are non-empty; `#`-prefixed ones must be `#RGB` or
/// `#RRGGBB` length. Non-hex literals are palette indices and get
/// parsed later by the resolver.
pub fn color(literal: &str, op: &'static str) -> Result<(), BoundaryError> {
    if literal.is_empty() {
        return Err(BoundaryError::Validation {
            op,
            message: "empty color string".to_string(),
        });
    }
    if literal.starts_with('#') && literal.len() != 4 && literal.len() != 7 {
        return Err(BoundaryError::Validation {
            op,
            message: format!("invalid hex color format: {literal}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_boundaries_inclusive() {
        assert!(position(0.0, "t", "h").is_ok());
        assert!(position(1.0, "t", "h").is_ok());
        assert!(position(0.5, "t", "h").is_ok());
        assert!(position(-0.0001, "t", "h").is_err());
        assert!(position(1.0001, "t", "h").is_err());
        assert!(position(f64::NAN, "t", "h").is_err());
    }

    #[test]
    fn dimension_rejects_negative() {
        assert!(dimension(0, "t", "width").is_ok());
        assert!(dimension(100, "t", "width").is_ok());
        assert!(dimension(-1, "t", "width").is_err());
    }

    #[test]
    fn color_shape_check() {
        assert!(color("#ff0000", "t").is_ok());
        assert!(color("#f00", "t").is_ok());
        assert!(color("21", "t").is_ok());
        assert!(color("", "t").is_err());
        assert!(color("#ff00", "t").is_err());
        assert!(color("#ff000000", "t").is_err());
    }
}
