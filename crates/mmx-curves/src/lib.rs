//! # mmx-curves
//!
//! Saturation response ("reach") curves: the effect of a channel at
//! arbitrary spend levels, independent of any observed time series.
//! Used by visualization layers to plot diminishing returns and by
//! budget-allocation routines to compare marginal ROI across channels.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Response curve evaluation.
pub mod response_curve;

pub use response_curve::{CurvePoint, ResponseCurve};
