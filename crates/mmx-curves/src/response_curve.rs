//! `ResponseCurve` – the saturation response of a channel over arbitrary
//! spend levels.
//!
//! A curve is a pure function of its saturation parameters: no history,
//! no time dependency.  Evaluating it answers "what is the effect at
//! spend level x" for any non-negative x.

use mmx_core::errors::{Error, Result};
use mmx_core::{check_positive, ensure, Effect, Real, Size, Spend};
use mmx_transforms::saturation::{hill_saturation, SaturationParameters};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single sampled point on a response curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// The queried spend level.
    pub spend: Spend,
    /// The saturated effect at that spend, in `[0, 1)`.
    pub effect: Effect,
}

/// The Hill-curve response of a channel as a function of spend.
///
/// Parameters are validated when the [`SaturationParameters`] are
/// constructed; evaluation itself only rejects invalid spend queries.
/// Effect values are monotone non-decreasing in spend and approach 1
/// asymptotically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseCurve {
    params: SaturationParameters,
}

impl ResponseCurve {
    /// Build a curve from validated saturation parameters.
    pub fn new(params: SaturationParameters) -> Self {
        Self { params }
    }

    /// The underlying saturation parameters.
    pub fn parameters(&self) -> &SaturationParameters {
        &self.params
    }

    /// The effect at a single spend level.
    ///
    /// # Errors
    /// Fails if `spend` is negative or non-finite.
    pub fn effect(&self, spend: Spend) -> Result<Effect> {
        let out = hill_saturation(&[spend], self.params.half_saturation, self.params.slope)?;
        Ok(out[0])
    }

    /// The marginal effect – the derivative of the curve with respect to
    /// spend:
    ///
    /// ```text
    /// d effect / d spend = s · k^s · x^(s−1) / (k^s + x^s)²
    /// ```
    ///
    /// Strictly positive for `x > 0`.  Comparing marginal effects across
    /// channels at candidate spend levels is how a budget allocator
    /// decides where the next unit of spend earns most.
    ///
    /// At `x = 0` the limit value is returned: `0` for slopes above 1,
    /// `1/k` at slope 1, and `+∞` for slopes below 1 (the curve leaves
    /// the origin vertically).
    ///
    /// # Errors
    /// Fails if `spend` is negative or non-finite.
    pub fn marginal_effect(&self, spend: Spend) -> Result<Real> {
        ensure!(
            spend.is_finite() && spend >= 0.0,
            Error::Validation {
                param: "spend".into(),
                value: spend,
                constraint: "a finite value >= 0",
            }
        );
        let k = self.params.half_saturation;
        let s = self.params.slope;
        if spend == 0.0 {
            return Ok(if s > 1.0 {
                0.0
            } else if s == 1.0 {
                1.0 / k
            } else {
                Real::INFINITY
            });
        }
        // s/x · e·(1−e) is the derivative rewritten in terms of the
        // effect e itself, so it inherits the overflow-safe evaluation.
        let e = self.effect(spend)?;
        Ok(s * e * (1.0 - e) / spend)
    }

    /// Sample the curve at each spend level in `spend_range`.
    ///
    /// The output preserves the exact order and cardinality of the input:
    /// one [`CurvePoint`] per queried level.
    ///
    /// # Errors
    /// Fails if `spend_range` is empty or contains a negative or
    /// non-finite value.
    pub fn sample(&self, spend_range: &[Spend]) -> Result<Vec<CurvePoint>> {
        let effects =
            hill_saturation(spend_range, self.params.half_saturation, self.params.slope)?;
        Ok(spend_range
            .iter()
            .zip(effects)
            .map(|(&spend, effect)| CurvePoint { spend, effect })
            .collect())
    }

    /// Sample an inclusive linear sweep from 0 to `max_spend`.
    ///
    /// Both endpoints are included; `points` controls the grid density.
    ///
    /// # Errors
    /// Fails if `max_spend` is non-positive or non-finite, or if
    /// `points < 2`.
    pub fn sweep(&self, max_spend: Spend, points: Size) -> Result<Vec<CurvePoint>> {
        check_positive("max_spend", max_spend)?;
        ensure!(
            points >= 2,
            Error::Validation {
                param: "points".into(),
                value: points as Real,
                constraint: "at least 2 grid points",
            }
        );
        let last = (points - 1) as Real;
        // Ratio form so the final grid point lands exactly on max_spend.
        let grid: Vec<Spend> = (0..points)
            .map(|i| max_spend * (i as Real / last))
            .collect();
        self.sample(&grid)
    }
}
