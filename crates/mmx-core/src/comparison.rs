//! Floating-point comparison helpers for effect values.
//!
//! Saturated effects live in `[0, 1)` and are usually compared against a
//! fixed absolute tolerance; regressor series are compared element-wise.

use crate::Real;

/// Default absolute tolerance for effect comparisons.
pub const EPSILON: Real = 1e-9;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `a` and `b` agree to within `n` units of relative
/// machine epsilon (scaled by the larger magnitude).
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let tol = a.abs().max(b.abs()) * f64::EPSILON * n as f64;
    (a - b).abs() <= tol
}

/// Element-wise [`close`] over two series.
///
/// Returns `false` when the lengths differ; two series of different
/// lengths never describe the same regressor.
pub fn series_close(a: &[Real], b: &[Real], epsilon: Real) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| close(x, y, epsilon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_respects_tolerance() {
        assert!(close(0.5, 0.5 + 1e-10, EPSILON));
        assert!(!close(0.5, 0.5 + 1e-8, EPSILON));
    }

    #[test]
    fn close_enough_scales_with_magnitude() {
        assert!(close_enough(1.0, 1.0, 10));
        assert!(close_enough(1.0, 1.0 + f64::EPSILON * 5.0, 10));
        assert!(!close_enough(1.0, 1.1, 10));
    }

    #[test]
    fn series_close_compares_element_wise() {
        assert!(series_close(&[0.1, 0.5], &[0.1, 0.5 + 1e-12], EPSILON));
        assert!(!series_close(&[0.1, 0.5], &[0.1, 0.6], EPSILON));
    }

    #[test]
    fn series_close_rejects_length_mismatch() {
        assert!(!series_close(&[0.1, 0.5], &[0.1], EPSILON));
    }
}
