// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A measurement was zero, negative, NaN, or infinite, or so large that
    /// the shape's area is no longer finite.
    #[error("invalid {field}: {value} ({})", requirement(.value))]
    InvalidDimension { field: &'static str, value: f64 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDimension { field, value } => {
                let mut hints = vec![format!("Got {field} = {value}")];
                if value.is_nan() || value.is_infinite() {
                    hints.push(format!("The {field} must be a finite number"));
                } else if overflows(*value) {
                    hints.push(format!(
                        "The {field} is too large: the area would exceed {:e}",
                        f64::MAX
                    ));
                } else {
                    hints.push(format!("The {field} must be greater than zero"));
                }
                hints.push("Example: shapecalc area rectangle --width 4 --height 5".into());
                hints
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDimension { .. } => ErrorCategory::Validation,
        }
    }
}

/// A value that is itself a valid measurement can only be rejected because
/// the area it produces overflows.
fn overflows(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn requirement(value: &f64) -> &'static str {
    if overflows(*value) {
        "too large, the resulting area is not finite"
    } else {
        "must be a finite number greater than zero"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}

/// Convenient result type alias.
pub type DomainResult<T> = Result<T, DomainError>;
