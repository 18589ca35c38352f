// ============================================================================
// Precision-Propagating Arithmetic
// Additive (lsd) and multiplicative (sigfigs) propagation rules
// ============================================================================

use super::errors::{PrecisionError, PrecisionResult};
use super::precision::Precision;
use super::sig_float::SigFloat;
use std::ops::{Add, Div, Mul, Sub};

/// Additive rule: the result is reliable down to the coarsest operand lsd.
/// An exact operand never degrades precision. The result's sigfig count
/// re-derives from its own magnitude, so cancellation is reflected.
pub(crate) fn additive(
    lhs: SigFloat,
    rhs: SigFloat,
    op: impl FnOnce(f64, f64) -> f64,
) -> SigFloat {
    let value = op(lhs.value(), rhs.value());
    let precision = match (lhs.precision(), rhs.precision()) {
        (Precision::Infinite, Precision::Infinite) => Precision::Infinite,
        (Precision::Infinite, Precision::Lsd(place))
        | (Precision::Lsd(place), Precision::Infinite) => Precision::Lsd(place),
        (Precision::Lsd(a), Precision::Lsd(b)) => Precision::Lsd(a.max(b)),
    };
    let result = SigFloat::from_parts(value, precision);
    if matches!(result.sigfigs(), Some(count) if count <= 0) {
        tracing::debug!("additive cancellation left no significant figures in {}", value);
    }
    result
}

/// Multiplicative rule: the result carries the smaller operand sigfig
/// count, re-anchored to the result's own magnitude. Fails when an operand
/// has no significant figures left.
pub(crate) fn multiplicative(
    lhs: SigFloat,
    rhs: SigFloat,
    op: impl FnOnce(f64, f64) -> f64,
) -> PrecisionResult<SigFloat> {
    let sigfigs = match (lhs.sigfigs(), rhs.sigfigs()) {
        (None, None) => return Ok(SigFloat::new(op(lhs.value(), rhs.value()))),
        (Some(count), None) | (None, Some(count)) => count,
        (Some(a), Some(b)) => a.min(b),
    };
    if sigfigs <= 0 {
        tracing::debug!("rejecting operation on operand with {} significant figures", sigfigs);
        return Err(PrecisionError::UndefinedPrecision);
    }
    Ok(SigFloat::with_sigfigs_unchecked(
        op(lhs.value(), rhs.value()),
        sigfigs,
    ))
}

impl SigFloat {
    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `UndefinedPrecision` if either operand has a sigfig count
    /// of zero or below (typically after additive cancellation).
    #[inline]
    pub fn checked_mul(self, rhs: impl Into<SigFloat>) -> PrecisionResult<Self> {
        multiplicative(self, rhs.into(), |a, b| a * b)
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `UndefinedPrecision` if either operand has a sigfig count
    /// of zero or below.
    #[inline]
    pub fn checked_div(self, rhs: impl Into<SigFloat>) -> PrecisionResult<Self> {
        multiplicative(self, rhs.into(), |a, b| a / b)
    }

    /// Checked exponentiation; precision propagates like multiplication.
    ///
    /// # Errors
    /// Returns `UndefinedPrecision` if either operand has a sigfig count
    /// of zero or below.
    #[inline]
    pub fn checked_pow(self, exp: impl Into<SigFloat>) -> PrecisionResult<Self> {
        multiplicative(self, exp.into(), f64::powf)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================
//
// Addition and subtraction are total. Multiplication and division follow
// the teacher pattern of infallible operators for ergonomics (panic on a
// precision-degraded operand - use checked_* in production). Plain f64
// operands coerce to exact values; the reflected f64-on-the-left impls
// keep the mathematically correct operand order for - and /.

impl Add for SigFloat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        additive(self, rhs, |a, b| a + b)
    }
}

impl Add<f64> for SigFloat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self + SigFloat::new(rhs)
    }
}

impl Add<SigFloat> for f64 {
    type Output = SigFloat;

    #[inline]
    fn add(self, rhs: SigFloat) -> Self::Output {
        SigFloat::new(self) + rhs
    }
}

impl Sub for SigFloat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        additive(self, rhs, |a, b| a - b)
    }
}

impl Sub<f64> for SigFloat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self - SigFloat::new(rhs)
    }
}

impl Sub<SigFloat> for f64 {
    type Output = SigFloat;

    #[inline]
    fn sub(self, rhs: SigFloat) -> Self::Output {
        SigFloat::new(self) - rhs
    }
}

impl Mul for SigFloat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("SigFloat multiplication with no significant figures")
    }
}

impl Mul<f64> for SigFloat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self * SigFloat::new(rhs)
    }
}

impl Mul<SigFloat> for f64 {
    type Output = SigFloat;

    #[inline]
    fn mul(self, rhs: SigFloat) -> Self::Output {
        SigFloat::new(self) * rhs
    }
}

impl Div for SigFloat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("SigFloat division with no significant figures")
    }
}

impl Div<f64> for SigFloat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self / SigFloat::new(rhs)
    }
}

impl Div<SigFloat> for f64 {
    type Output = SigFloat;

    #[inline]
    fn div(self, rhs: SigFloat) -> Self::Output {
        SigFloat::new(self) / rhs
    }
}

// ============================================================================
// Tests
// ============================================================================
