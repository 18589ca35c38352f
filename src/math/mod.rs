// ============================================================================
// Math Module
// Precision-carrying wrappers over the platform math library
// ============================================================================
//
// This module provides:
// - MathValue: plain-or-tracked operand union for the generic wrappers
// - Free functions (sin, cos, atan2, ...) that accept either plain f64s
//   or SigFloats and only track precision when the input does
// - Inherent SigFloat methods for the already-tracked case
//
// A transcendental function changes the order of magnitude of its input,
// so precision is carried as a digit COUNT and re-anchored to the result
// magnitude, never as a fixed lsd place.

use crate::numeric::arithmetic::multiplicative;
use crate::numeric::{PrecisionResult, SigFloat};

/// Operand/result union for the wrapped math functions: either a plain
/// float (left untouched by precision tracking) or a tracked value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathValue {
    Plain(f64),
    Tracked(SigFloat),
}

impl MathValue {
    /// The raw magnitude, whichever variant holds it.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            MathValue::Plain(value) => value,
            MathValue::Tracked(value) => value.value(),
        }
    }

    /// The tracked value, if any.
    #[inline]
    pub fn tracked(self) -> Option<SigFloat> {
        match self {
            MathValue::Plain(_) => None,
            MathValue::Tracked(value) => Some(value),
        }
    }

    /// Coerce to a `SigFloat`; a plain float becomes an exact value.
    #[inline]
    pub fn into_sigfloat(self) -> SigFloat {
        match self {
            MathValue::Plain(value) => SigFloat::new(value),
            MathValue::Tracked(value) => value,
        }
    }
}

impl From<f64> for MathValue {
    #[inline]
    fn from(value: f64) -> Self {
        MathValue::Plain(value)
    }
}

impl From<SigFloat> for MathValue {
    #[inline]
    fn from(value: SigFloat) -> Self {
        MathValue::Tracked(value)
    }
}

/// Apply a unary function, carrying the argument's sigfig count through to
/// the result. Plain in, plain out.
fn unary(x: MathValue, f: fn(f64) -> f64) -> MathValue {
    match x {
        MathValue::Plain(value) => MathValue::Plain(f(value)),
        MathValue::Tracked(value) => MathValue::Tracked(value.carry_unary(f)),
    }
}

/// Apply a binary function. Plain/plain passes through untracked;
/// otherwise both operands coerce and the multiplicative rule applies.
fn binary(x: MathValue, y: MathValue, f: fn(f64, f64) -> f64) -> PrecisionResult<MathValue> {
    match (x, y) {
        (MathValue::Plain(a), MathValue::Plain(b)) => Ok(MathValue::Plain(f(a, b))),
        (x, y) => {
            multiplicative(x.into_sigfloat(), y.into_sigfloat(), f).map(MathValue::Tracked)
        },
    }
}

macro_rules! wrap_unary {
    ($($(#[$doc:meta])* $name:ident => $func:expr;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: impl Into<MathValue>) -> MathValue {
                unary(x.into(), $func)
            }
        )*
    };
}

wrap_unary! {
    /// Sine of an angle in radians.
    sin => f64::sin;
    /// Cosine of an angle in radians.
    cos => f64::cos;
    /// Tangent of an angle in radians.
    tan => f64::tan;
    /// Arcsine, in radians.
    asin => f64::asin;
    /// Arccosine, in radians.
    acos => f64::acos;
    /// Arctangent, in radians.
    atan => f64::atan;
    /// Natural logarithm.
    ln => f64::ln;
    /// Base-10 logarithm.
    log10 => f64::log10;
    /// Exponential, e^x.
    exp => f64::exp;
    /// Square root.
    sqrt => f64::sqrt;
    /// Radians to degrees.
    degrees => f64::to_degrees;
    /// Degrees to radians.
    radians => f64::to_radians;
}

/// Four-quadrant arctangent of `y/x`, in radians.
///
/// # Errors
/// Returns `UndefinedPrecision` if a tracked operand has a sigfig count of
/// zero or below.
#[inline]
pub fn atan2(y: impl Into<MathValue>, x: impl Into<MathValue>) -> PrecisionResult<MathValue> {
    binary(y.into(), x.into(), f64::atan2)
}

/// Raise `base` to the power `exp`.
///
/// # Errors
/// Returns `UndefinedPrecision` if a tracked operand has a sigfig count of
/// zero or below.
#[inline]
pub fn pow(base: impl Into<MathValue>, exp: impl Into<MathValue>) -> PrecisionResult<MathValue> {
    binary(base.into(), exp.into(), f64::powf)
}

// ============================================================================
// Inherent methods for the already-tracked case
// ============================================================================

impl SigFloat {
    fn carry_unary(self, f: fn(f64) -> f64) -> Self {
        match self.sigfigs() {
            None => SigFloat::new(f(self.value())),
            Some(count) => SigFloat::with_sigfigs_unchecked(f(self.value()), count),
        }
    }

    /// Sine of an angle in radians, keeping this value's sigfig count.
    #[inline]
    pub fn sin(self) -> Self {
        self.carry_unary(f64::sin)
    }

    /// Cosine of an angle in radians, keeping this value's sigfig count.
    #[inline]
    pub fn cos(self) -> Self {
        self.carry_unary(f64::cos)
    }

    /// Tangent of an angle in radians, keeping this value's sigfig count.
    #[inline]
    pub fn tan(self) -> Self {
        self.carry_unary(f64::tan)
    }

    /// Arcsine, in radians.
    #[inline]
    pub fn asin(self) -> Self {
        self.carry_unary(f64::asin)
    }

    /// Arccosine, in radians.
    #[inline]
    pub fn acos(self) -> Self {
        self.carry_unary(f64::acos)
    }

    /// Arctangent, in radians.
    #[inline]
    pub fn atan(self) -> Self {
        self.carry_unary(f64::atan)
    }

    /// Four-quadrant arctangent of `self/x`, in radians.
    ///
    /// # Errors
    /// Returns `UndefinedPrecision` if either operand has a sigfig count
    /// of zero or below.
    #[inline]
    pub fn atan2(self, x: impl Into<SigFloat>) -> PrecisionResult<Self> {
        multiplicative(self, x.into(), f64::atan2)
    }

    /// Natural logarithm, keeping this value's sigfig count.
    #[inline]
    pub fn ln(self) -> Self {
        self.carry_unary(f64::ln)
    }

    /// Base-10 logarithm, keeping this value's sigfig count.
    #[inline]
    pub fn log10(self) -> Self {
        self.carry_unary(f64::log10)
    }

    /// Exponential, keeping this value's sigfig count.
    #[inline]
    pub fn exp(self) -> Self {
        self.carry_unary(f64::exp)
    }

    /// Square root, keeping this value's sigfig count.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.carry_unary(f64::sqrt)
    }

    /// Radians to degrees, keeping this value's sigfig count.
    #[inline]
    pub fn to_degrees(self) -> Self {
        self.carry_unary(f64::to_degrees)
    }

    /// Degrees to radians, keeping this value's sigfig count.
    #[inline]
    pub fn to_radians(self) -> Self {
        self.carry_unary(f64::to_radians)
    }
}

// ============================================================================
// Tests
// ============================================================================
