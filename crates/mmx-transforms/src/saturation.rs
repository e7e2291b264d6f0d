//! Saturation transformations – diminishing returns in media response.
//!
//! A saturation function maps (adstocked) spend to a bounded effect in
//! `[0, 1)`.  The Hill curve is the workhorse:
//!
//! ```text
//! effect = x^s / (k^s + x^s)
//! ```
//!
//! where `k` is the half-saturation point (effect = 0.5 at `x = k`) and
//! `s` controls the steepness of the transition.  `s = 1` gives the
//! Michaelis–Menten form.

use mmx_core::errors::Result;
use mmx_core::{check_positive, check_spend_series, Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hill-curve saturation parameters for a single channel.
///
/// `half_saturation` is typically set from historical mean spend; the
/// slope defaults to 1 when nothing sharper is called for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaturationParameters {
    /// Spend level at which the effect reaches half its asymptotic
    /// maximum.  Strictly positive.
    pub half_saturation: Real,
    /// Hill exponent controlling curve steepness.  Strictly positive.
    pub slope: Real,
}

impl SaturationParameters {
    /// Slope used when none is specified.
    pub const DEFAULT_SLOPE: Real = 1.0;

    /// Create validated parameters with the default slope of 1.
    ///
    /// # Errors
    /// Fails if `half_saturation` is non-positive or non-finite.
    pub fn new(half_saturation: Real) -> Result<Self> {
        Self::with_slope(half_saturation, Self::DEFAULT_SLOPE)
    }

    /// Create validated parameters with an explicit slope.
    ///
    /// # Errors
    /// Fails if either value is non-positive or non-finite.
    pub fn with_slope(half_saturation: Real, slope: Real) -> Result<Self> {
        check_positive("half_saturation", half_saturation)?;
        check_positive("slope", slope)?;
        Ok(Self {
            half_saturation,
            slope,
        })
    }
}

/// Hill-curve saturation.
///
/// Maps each element of `series` to `x^s / (k^s + x^s)`.  Zero maps to
/// zero exactly, `x = k` maps to 0.5, and the output approaches (never
/// reaches) 1 as `x` grows.  Monotone non-decreasing in `x`.
///
/// Computed through the reciprocal form `1 / (1 + (k/x)^s)` for `x > 0`,
/// which stays finite where the direct numerator `x^s` would overflow.
///
/// # Errors
/// Fails if `half_saturation` or `slope` is non-positive or non-finite,
/// or if `series` is empty or contains a negative or non-finite value.
pub fn hill_saturation(series: &[Real], half_saturation: Real, slope: Real) -> Result<Vec<Real>> {
    check_positive("half_saturation", half_saturation)?;
    check_positive("slope", slope)?;
    check_spend_series("series", series)?;

    Ok(series
        .iter()
        .map(|&x| hill(x, half_saturation, slope))
        .collect())
}

#[inline]
fn hill(x: Real, k: Real, s: Real) -> Real {
    if x == 0.0 {
        0.0
    } else {
        1.0 / (1.0 + (k / x).powf(s))
    }
}

/// Logistic saturation.
///
/// Maps each element of `series` to `1 − exp(−lam · x)`: zero maps to
/// zero, the output is bounded in `[0, 1)` and monotone non-decreasing,
/// with `lam` controlling how quickly returns diminish.
///
/// # Errors
/// Fails if `lam` is non-positive or non-finite, or if `series` is empty
/// or contains a negative or non-finite value.
pub fn logistic_saturation(series: &[Real], lam: Real) -> Result<Vec<Real>> {
    check_positive("lam", lam)?;
    check_spend_series("series", series)?;

    Ok(series.iter().map(|&x| 1.0 - (-lam * x).exp()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hill_worked_example() {
        let adstocked = [100.0, 130.0, 125.0, 102.5, 71.25];
        let out = hill_saturation(&adstocked, 80.0, 1.0).unwrap();
        let expected = [0.5556, 0.6190, 0.6098, 0.5619, 0.4711];
        for (got, want) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-3);
        }
    }

    #[test]
    fn hill_boundaries() {
        let out = hill_saturation(&[0.0, 80.0], 80.0, 1.0).unwrap();
        assert_eq!(out[0], 0.0);
        assert_abs_diff_eq!(out[1], 0.5, epsilon = 1e-9);

        // Half-saturation holds for any slope.
        let steep = hill_saturation(&[80.0], 80.0, 3.5).unwrap();
        assert_abs_diff_eq!(steep[0], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn hill_stays_finite_for_huge_input() {
        // The direct numerator x^s would overflow here.
        let out = hill_saturation(&[1e300], 80.0, 2.0).unwrap();
        assert!(out[0].is_finite());
        assert!(out[0] > 0.999);
        assert!(out[0] <= 1.0);
    }

    #[test]
    fn hill_monotone() {
        let out = hill_saturation(&[0.0, 10.0, 50.0, 100.0, 500.0], 80.0, 2.0).unwrap();
        for pair in out.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn hill_rejects_bad_parameters() {
        assert!(hill_saturation(&[1.0], 0.0, 1.0).is_err());
        assert!(hill_saturation(&[1.0], 80.0, 0.0).is_err());
        assert!(hill_saturation(&[1.0], -80.0, 1.0).is_err());
    }

    #[test]
    fn hill_rejects_bad_series() {
        assert!(hill_saturation(&[], 80.0, 1.0).is_err());
        assert!(hill_saturation(&[1.0, f64::NAN], 80.0, 1.0).is_err());
        assert!(hill_saturation(&[-0.5], 80.0, 1.0).is_err());
    }

    #[test]
    fn parameters_default_slope() {
        let p = SaturationParameters::new(80.0).unwrap();
        assert_eq!(p.slope, 1.0);
        assert!(SaturationParameters::new(0.0).is_err());
        assert!(SaturationParameters::with_slope(80.0, -1.0).is_err());
    }

    #[test]
    fn logistic_boundaries_and_bounds() {
        let out = logistic_saturation(&[0.0, 1.0, 10.0, 1000.0], 0.05).unwrap();
        assert_eq!(out[0], 0.0);
        for pair in out.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for &v in &out {
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(logistic_saturation(&[1.0], 0.0).is_err());
    }
}
