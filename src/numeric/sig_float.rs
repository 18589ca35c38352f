// ============================================================================
// SigFloat Value Type
// An f64 magnitude paired with a significant-figures annotation
// ============================================================================

use super::errors::{PrecisionError, PrecisionResult};
use super::format::round_to_sigfigs;
use super::precision::{lsd_for, Precision};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A floating-point value that knows how many of its digits are reliable.
///
/// Every `SigFloat` holds the full-precision `f64` magnitude; the precision
/// annotation only governs how results of arithmetic are tagged and how the
/// value is displayed. Values are immutable: every operation returns a new
/// `SigFloat`.
///
/// # Example
/// ```
/// use sigfloat::prelude::*;
///
/// let radius = SigFloat::with_sigfigs(3.4, 2)?;
/// let area = std::f64::consts::PI * radius.checked_pow(2.0)?;
/// assert_eq!(area.to_string(), "36");
/// # Ok::<(), PrecisionError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SigFloat {
    value: f64,
    precision: Precision,
}

impl SigFloat {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an exact value with unlimited significant digits.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            precision: Precision::Infinite,
        }
    }

    /// Create a value carrying `sigfigs` significant digits, anchored to
    /// the magnitude's own most significant digit.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `sigfigs` is zero.
    #[inline]
    pub fn with_sigfigs(value: f64, sigfigs: u32) -> PrecisionResult<Self> {
        if sigfigs == 0 {
            return Err(PrecisionError::InvalidPrecision);
        }
        Ok(Self::with_sigfigs_unchecked(value, sigfigs as i32))
    }

    /// Create a value reliable down to the decimal place `lsd`
    /// (0 = ones, positive = left of the ones place, negative = right).
    #[inline]
    pub const fn with_lsd(value: f64, lsd: i32) -> Self {
        Self {
            value,
            precision: Precision::Lsd(lsd),
        }
    }

    /// Dynamic constructor for callers that carry an optional sigfigs count
    /// and an optional lsd place side by side.
    ///
    /// # Errors
    /// - `ConflictingPrecision` when both specs are supplied
    /// - `InvalidPrecision` when the sigfigs count is zero
    pub fn from_spec(
        value: f64,
        sigfigs: Option<u32>,
        lsd: Option<i32>,
    ) -> PrecisionResult<Self> {
        match (sigfigs, lsd) {
            (Some(_), Some(_)) => Err(PrecisionError::ConflictingPrecision),
            (Some(count), None) => Self::with_sigfigs(value, count),
            (None, Some(place)) => Ok(Self::with_lsd(value, place)),
            (None, None) => Ok(Self::new(value)),
        }
    }

    /// Internal constructor used by the arithmetic engine and the math
    /// wrappers: anchors a sigfigs count that may be zero or negative
    /// (degraded values propagate; validation happens at the public API).
    #[inline]
    pub(crate) fn with_sigfigs_unchecked(value: f64, sigfigs: i32) -> Self {
        Self {
            value,
            precision: Precision::Lsd(lsd_for(value, sigfigs)),
        }
    }

    #[inline]
    pub(crate) const fn from_parts(value: f64, precision: Precision) -> Self {
        Self { value, precision }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The full-precision magnitude, unrounded.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The stored precision descriptor.
    #[inline]
    pub const fn precision(self) -> Precision {
        self.precision
    }

    /// Decimal place of the least significant reliable digit, or `None`
    /// for an exact value.
    #[inline]
    pub const fn lsd(self) -> Option<i32> {
        self.precision.lsd()
    }

    /// Number of significant figures, derived from the magnitude's most
    /// significant digit and the stored lsd place. `None` means unlimited.
    /// Additive cancellation can leave a count of zero or below.
    #[inline]
    pub fn sigfigs(self) -> Option<i32> {
        self.precision.sigfigs_of(self.value)
    }

    /// Check whether this value carries unlimited significant digits.
    #[inline]
    pub const fn is_exact(self) -> bool {
        self.precision.is_infinite()
    }

    /// Absolute value. Precision is untouched: flipping the sign never
    /// moves the decimal place of any reliable digit.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            value: self.value.abs(),
            precision: self.precision,
        }
    }

    // ========================================================================
    // Precision-aware equivalence
    // ========================================================================

    /// Check whether a plain float is indistinguishable from this value at
    /// this value's own precision.
    ///
    /// The other value is formatted with the same significant-figure count
    /// (anchored to its own magnitude) and the display strings are
    /// compared.
    ///
    /// ```
    /// use sigfloat::SigFloat;
    ///
    /// let pi = SigFloat::with_sigfigs(std::f64::consts::PI, 4).unwrap();
    /// assert!(pi.equivalent_to(3.1415));
    /// assert!(!pi.equivalent_to(3.14));
    /// ```
    pub fn equivalent_to(&self, other: f64) -> bool {
        let other = match self.sigfigs() {
            None => Self::new(other),
            Some(count) => Self::with_sigfigs_unchecked(other, count),
        };
        self.to_string() == other.to_string()
    }
}

impl Default for SigFloat {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

// ============================================================================
// Equality and Ordering
// ============================================================================
//
// Equality requires matching magnitude AND matching significant-figure
// count, so a plain f64 never equals a finite-precision value. Ordering
// follows the raw magnitudes; two values with equal magnitudes but
// different precision are incomparable.

impl PartialEq for SigFloat {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.sigfigs() == other.sigfigs()
    }
}

impl PartialEq<f64> for SigFloat {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == SigFloat::new(*other)
    }
}

impl PartialEq<SigFloat> for f64 {
    #[inline]
    fn eq(&self, other: &SigFloat) -> bool {
        SigFloat::new(*self) == *other
    }
}

impl PartialOrd for SigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.value < other.value {
            Some(Ordering::Less)
        } else if self.value > other.value {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl PartialOrd<f64> for SigFloat {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&SigFloat::new(*other))
    }
}

impl PartialOrd<SigFloat> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &SigFloat) -> Option<Ordering> {
        SigFloat::new(*self).partial_cmp(other)
    }
}

// ============================================================================
// Sign and Coercion
// ============================================================================

impl Neg for SigFloat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            precision: self.precision,
        }
    }
}

impl From<f64> for SigFloat {
    /// A plain float coerces to an exact value.
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<SigFloat> for f64 {
    /// Numeric coercion yields the raw, unrounded magnitude.
    #[inline]
    fn from(value: SigFloat) -> Self {
        value.value
    }
}

impl std::str::FromStr for SigFloat {
    type Err = std::num::ParseFloatError;

    /// Parse a plain numeric literal as an exact value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f64>().map(Self::new)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl SigFloat {
    /// Convert from `rust_decimal::Decimal`, taking the decimal's scale as
    /// the precision annotation: a decimal written `1.20` is reliable down
    /// to the hundredths place.
    ///
    /// This is intended for API boundaries only (parsing user input).
    pub fn from_decimal(d: Decimal) -> Self {
        let value = d.to_f64().unwrap_or(f64::NAN);
        Self::with_lsd(value, -(d.scale() as i32))
    }

    /// Convert to `rust_decimal::Decimal`, rounded to this value's display
    /// precision. Returns `None` when the rounded value does not fit in a
    /// `Decimal` (exponent out of range, or a non-finite magnitude).
    ///
    /// This is intended for display/interchange only.
    pub fn to_decimal(self) -> Option<Decimal> {
        let sigfigs = match self.sigfigs() {
            None => return Decimal::from_f64_retain(self.value),
            Some(count) if count <= 0 => return Some(Decimal::ZERO),
            Some(count) => count,
        };
        let rounded = round_to_sigfigs(self.value, sigfigs)?;
        let mut mantissa: i128 = 0;
        for digit in &rounded.digits {
            mantissa = mantissa.checked_mul(10)?.checked_add(*digit as i128)?;
        }
        if rounded.negative {
            mantissa = -mantissa;
        }
        // value = mantissa * 10^(msd - sigfigs + 1)
        let scale = sigfigs as i64 - 1 - rounded.msd as i64;
        if scale >= 0 {
            Decimal::try_from_i128_with_scale(mantissa, u32::try_from(scale).ok()?).ok()
        } else {
            for _ in 0..-scale {
                mantissa = mantissa.checked_mul(10)?;
            }
            Decimal::try_from_i128_with_scale(mantissa, 0).ok()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
