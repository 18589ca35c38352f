// ============================================================================
// Numeric Module
// Significant-figures tracking for floating point values
// ============================================================================
//
// This module provides:
// - SigFloat: an f64 magnitude paired with a precision annotation
// - Precision: the annotation itself (exact, or reliable to an lsd place)
// - PrecisionError: error types for construction and arithmetic
//
// Design principles:
// - The full-precision magnitude is always kept; precision only governs
//   result tagging and display
// - Values are immutable; every operation returns a new value
// - Fallible arithmetic returns Result (operators panic, checked_* do not)
// - Precision propagates by lsd place for additive operations and by
//   sigfig count for multiplicative ones

pub(crate) mod arithmetic;
mod errors;
mod format;
mod precision;
mod sig_float;

pub use errors::{PrecisionError, PrecisionResult};
pub use precision::Precision;
pub use sig_float::SigFloat;
