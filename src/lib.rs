// ============================================================================
// Sigfloat Library
// Floating point arithmetic that tracks significant figures
// ============================================================================

//! # Sigfloat
//!
//! A replacement for bare `f64` arithmetic in calculations where the
//! inputs are measurements: every [`SigFloat`] pairs a full-precision
//! magnitude with a significant-figures annotation, arithmetic propagates
//! the annotation by the usual sig-fig rules, and display rounds to
//! exactly the digits the value is entitled to.
//!
//! ## Features
//!
//! - **Two propagation rules**: addition and subtraction keep the coarsest
//!   decimal place of any operand; multiplication, division, and powers
//!   keep the smallest digit count
//! - **Cancellation-aware**: subtracting nearly equal measurements can
//!   consume every reliable digit, and multiplying with such a value is
//!   an error rather than a fiction
//! - **Precision-aware display**: standard or scientific notation chosen
//!   by magnitude, rounding half away from zero
//! - **Wrapped math functions** that carry precision through `sin`, `log`,
//!   `atan2`, and friends, and leave plain floats untouched
//!
//! ## Example
//!
//! ```rust
//! use sigfloat::prelude::*;
//! use sigfloat::math;
//! use std::f64::consts::PI;
//!
//! // A radius measured to two significant figures
//! let radius = SigFloat::with_sigfigs(3.4, 2)?;
//!
//! // Area keeps two sigfigs; PI is exact and never degrades anything
//! let area = PI * radius.checked_pow(2.0)?;
//! assert_eq!(area.to_string(), "36");
//!
//! // Addition is limited by decimal place, not digit count
//! let a = SigFloat::with_sigfigs(0.00123, 3)?;
//! let b = SigFloat::with_sigfigs(0.1234, 4)?;
//! assert_eq!((a + b).to_string(), "0.1246");
//!
//! // Wrapped math functions carry the annotation through
//! let angle = SigFloat::with_sigfigs(PI / 4.0, 3)?;
//! assert_eq!(math::sin(angle).into_sigfloat().to_string(), "0.707");
//! # Ok::<(), PrecisionError>(())
//! ```

pub mod math;
pub mod numeric;

pub use math::MathValue;
pub use numeric::{Precision, PrecisionError, PrecisionResult, SigFloat};

// Re-exports for convenience
pub mod prelude {
    pub use crate::math::MathValue;
    pub use crate::numeric::{Precision, PrecisionError, PrecisionResult, SigFloat};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::math;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_area_workflow() {
        let radius = SigFloat::with_sigfigs(3.4, 2).unwrap();
        let area = PI * radius.checked_pow(2.0).unwrap();
        assert_eq!(area.to_string(), "36");
        assert_eq!(area.sigfigs(), Some(2));
    }

    #[test]
    fn test_mixed_precision_addition() {
        let a = SigFloat::with_sigfigs(0.00123, 3).unwrap();
        let b = SigFloat::with_sigfigs(0.1234, 4).unwrap();
        assert_eq!((a + b).to_string(), "0.1246");
        assert_eq!((a + 0.12345678).to_string(), "0.12469");
    }

    #[test]
    fn test_wrapped_math_in_context() {
        let angle = SigFloat::with_sigfigs(PI / 4.0, 3).unwrap();
        assert_eq!(angle.to_string(), "0.785");
        assert_eq!(math::sin(angle).into_sigfloat().to_string(), "0.707");
        // the raw magnitude survives underneath the rounded display
        assert_eq!(angle.value(), PI / 4.0);
    }

    #[test]
    fn test_measurement_pipeline_degrades_and_fails() {
        // two nearly equal measurements cancel to nothing useful
        let first = SigFloat::with_sigfigs(1.23456, 3).unwrap();
        let second = SigFloat::with_sigfigs(1.23567, 3).unwrap();
        let difference = first - second;
        assert_eq!(difference.to_string(), "0");
        assert_eq!(
            difference.checked_mul(3.0),
            Err(PrecisionError::UndefinedPrecision)
        );
        // but adding it back in recovers usable digits
        assert_eq!((difference + first).sigfigs(), Some(3));
    }

    #[test]
    fn test_sorting_by_magnitude() {
        let mut values = vec![
            SigFloat::with_sigfigs(1.234, 3).unwrap(),
            SigFloat::with_sigfigs(1.200, 3).unwrap(),
            SigFloat::with_sigfigs(1.23456, 3).unwrap(),
        ];
        values.sort_by(|a, b| a.value().total_cmp(&b.value()));
        let rendered: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
        assert_eq!(
            rendered,
            vec![
                "SigFloat(1.2, 3)",
                "SigFloat(1.234, 3)",
                "SigFloat(1.23456, 3)"
            ]
        );
    }
}
