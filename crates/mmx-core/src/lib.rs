//! # mmx-core
//!
//! Core types, validation helpers, and error definitions for mediamix-rs.
//!
//! Everything the transform crates have in common lives here: the type
//! aliases, the error taxonomy and `ensure!` macro, the precondition
//! checks, and float-comparison helpers for effect values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Precondition checks shared by the transform crates.
pub mod validate;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A per-period spend (or exposure) level for a single channel.
pub type Spend = Real;

/// A saturated response level in `[0, 1)`.
pub type Effect = Real;

/// A geometric-decay retention rate in `[0, 1)`.
pub type Retention = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use comparison::{close, close_enough, series_close};
pub use errors::{Error, Result};
pub use validate::{check_positive, check_spend_series, check_unit_interval};
