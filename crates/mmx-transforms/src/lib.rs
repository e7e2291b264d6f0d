//! # mmx-transforms
//!
//! The transformation core of mediamix-rs: adstock carry-over, saturation
//! nonlinearities, and the per-channel pipeline composing the two.
//!
//! Every function here is pure – inputs are never mutated or retained,
//! outputs are freshly allocated, and a call either returns a fully
//! computed result or fails atomically with a validation error.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Adstock (carry-over) transformations.
pub mod adstock;

/// Per-channel adstock-then-saturation pipeline.
pub mod pipeline;

/// Saturation (diminishing-returns) transformations.
pub mod saturation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adstock::{geometric_adstock, weibull_adstock, AdstockParameters};
pub use pipeline::{adstock_and_saturation, transform_channels, ChannelParameters};
pub use saturation::{hill_saturation, logistic_saturation, SaturationParameters};
