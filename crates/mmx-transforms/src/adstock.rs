//! Adstock transformations – carry-over effects in media spend.
//!
//! Advertising exposure in period `t` keeps influencing periods
//! `t+1, t+2, …` with decaying weight.  The geometric variant decays each
//! lag by a constant retention rate; the Weibull variant allows a more
//! flexible decay shape (delayed peaks, heavier tails).

use mmx_core::errors::{Error, Result};
use mmx_core::{
    check_positive, check_spend_series, check_unit_interval, ensure, Real, Retention, Size,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric carry-over parameters for a single channel.
///
/// `alpha` is the per-lag retention rate in `[0, 1)`; `max_lag` is the
/// number of prior periods whose influence is modeled (the truncation
/// window of the decay sum).  Weekly media data typically uses windows of
/// 4–13 periods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdstockParameters {
    /// Retention rate per lag step, in `[0, 1)`.
    pub alpha: Retention,
    /// Number of prior periods whose influence is modeled.
    pub max_lag: Size,
}

impl AdstockParameters {
    /// Create validated adstock parameters.
    ///
    /// # Errors
    /// Fails if `alpha` is outside `[0, 1)` or non-finite.  `alpha = 1`
    /// would imply a carry-over that never decays and is disallowed.
    pub fn new(alpha: Retention, max_lag: Size) -> Result<Self> {
        check_unit_interval("alpha", alpha)?;
        Ok(Self { alpha, max_lag })
    }
}

/// Geometric (exponential-decay) adstock.
///
/// ```text
/// output[t] = Σ_{l=0}^{min(t, max_lag)} alpha^l · spend[t−l]
/// ```
///
/// Each output period is the current spend plus a geometrically decaying
/// weighted sum of up to `max_lag` preceding periods.  Early periods sum
/// only the lags that exist; there is no wraparound and no synthetic
/// zero-padding.  `alpha = 0` and `max_lag = 0` both reduce to the
/// identity transform.
///
/// # Errors
/// Fails if `alpha` is outside `[0, 1)`, or if `spend` is empty or
/// contains a negative or non-finite value.
pub fn geometric_adstock(spend: &[Real], alpha: Retention, max_lag: Size) -> Result<Vec<Real>> {
    check_unit_interval("alpha", alpha)?;
    check_spend_series("spend", spend)?;

    let mut result = Vec::with_capacity(spend.len());
    for t in 0..spend.len() {
        let window = t.min(max_lag);
        // Accumulate lags in ascending order: t, t-1, …, t-window.
        let mut value = 0.0;
        let mut weight = 1.0;
        for l in 0..=window {
            value += weight * spend[t - l];
            weight *= alpha;
        }
        result.push(value);
    }
    Ok(result)
}

/// Weibull adstock – a more flexible decay shape.
///
/// Lag weights follow a Weibull density over a window of `max_lag` lags
/// (weight 1 at lag 0) and are normalized to sum to one, so the transform
/// redistributes spend across time rather than inflating it.
///
/// # Errors
/// Fails if `shape` or `scale` is non-positive or non-finite, if
/// `max_lag` is zero (the window must contain at least the current
/// period), or if `spend` is empty or contains a negative or non-finite
/// value.
pub fn weibull_adstock(
    spend: &[Real],
    shape: Real,
    scale: Real,
    max_lag: Size,
) -> Result<Vec<Real>> {
    check_positive("shape", shape)?;
    check_positive("scale", scale)?;
    ensure!(
        max_lag >= 1,
        Error::Validation {
            param: "max_lag".into(),
            value: max_lag as Real,
            constraint: "a window of at least one lag",
        }
    );
    check_spend_series("spend", spend)?;

    // Build weights over lags 0..max_lag.
    let mut weights = Vec::with_capacity(max_lag);
    let mut sum = 0.0;
    for lag in 0..max_lag {
        let w = if lag == 0 {
            1.0
        } else {
            let ratio = lag as Real / scale;
            ratio.powf(shape - 1.0) * (-ratio.powf(shape)).exp() / scale
        };
        weights.push(w);
        sum += w;
    }
    for w in &mut weights {
        *w /= sum;
    }

    let mut result = Vec::with_capacity(spend.len());
    for t in 0..spend.len() {
        let mut value = 0.0;
        for (lag, &weight) in weights.iter().enumerate() {
            if t >= lag {
                value += weight * spend[t - lag];
            }
        }
        result.push(value);
    }
    Ok(result)
}
