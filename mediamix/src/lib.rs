//! # mediamix
//!
//! Adstock carry-over and saturation transformations for marketing mix
//! modeling: the numerical pipeline that turns raw per-channel spend
//! series into bounded "effective contribution" regressors, plus the
//! response curves used to visualize diminishing returns and compare
//! marginal ROI across channels.
//!
//! This crate is a **façade** over the workspace members: it re-exports
//! their public items under short module names so applications can depend
//! on a single crate instead of the individual `mmx-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! mediamix = "0.1"
//! ```
//!
//! ```rust
//! use mediamix::transforms::adstock_and_saturation;
//!
//! let spend = [100.0, 80.0, 60.0, 40.0, 20.0];
//! let effect = adstock_and_saturation(&spend, 0.5, 80.0, 4, 1.0).unwrap();
//! assert_eq!(effect.len(), spend.len());
//! assert!(effect.iter().all(|e| (0.0..1.0).contains(e)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, validation, and error definitions.
pub use mmx_core as core;

/// Adstock and saturation transforms, per-channel pipeline.
pub use mmx_transforms as transforms;

/// Response (reach) curve evaluation.
pub use mmx_curves as curves;
