//! Precondition checks shared by the transform crates.
//!
//! Each check either passes or fails with an [`Error`] carrying the
//! parameter name, the offending value, and the violated constraint.
//! Nothing is clamped or coerced.

use crate::errors::{Error, Result};
use crate::{ensure, Real};

/// Require `0 <= value < 1` and finite.
///
/// Used for geometric retention rates, where `value = 1` would imply a
/// carry-over that never decays.
pub fn check_unit_interval(param: &str, value: Real) -> Result<()> {
    ensure!(
        value.is_finite() && (0.0..1.0).contains(&value),
        Error::Validation {
            param: param.into(),
            value,
            constraint: "a finite value in [0, 1)",
        }
    );
    Ok(())
}

/// Require `value > 0` and finite.
pub fn check_positive(param: &str, value: Real) -> Result<()> {
    ensure!(
        value.is_finite() && value > 0.0,
        Error::Validation {
            param: param.into(),
            value,
            constraint: "a finite value > 0",
        }
    );
    Ok(())
}

/// Require a non-empty series of finite, non-negative values.
///
/// On failure the error names the offending element as `param[index]`.
pub fn check_spend_series(param: &str, series: &[Real]) -> Result<()> {
    ensure!(
        !series.is_empty(),
        Error::EmptySeries {
            param: param.into(),
        }
    );
    for (index, &value) in series.iter().enumerate() {
        ensure!(
            value.is_finite() && value >= 0.0,
            Error::Validation {
                param: format!("{param}[{index}]"),
                value,
                constraint: "a finite value >= 0",
            }
        );
    }
    Ok(())
}
