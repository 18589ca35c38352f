// ============================================================================
// Significant-Figures Formatter
// Digit rounding, notation selection, and string assembly
// ============================================================================

use super::sig_float::SigFloat;
use smallvec::SmallVec;
use std::fmt;

/// A magnitude decomposed into rounded decimal digits.
///
/// `digits` holds exactly the entitled significant digits (most significant
/// first), `msd` is the decimal place of the first digit, and `negative`
/// carries the sign. The represented value is `0.digits × 10^(msd + 1)`.
pub(crate) struct Rounded {
    pub(crate) digits: SmallVec<[u8; 24]>,
    pub(crate) msd: i32,
    pub(crate) negative: bool,
}

/// Round a magnitude to exactly `sigfigs` significant digits, half away
/// from zero.
///
/// The digit source is the shortest round-trip decimal form of the `f64`,
/// so ties are judged on the decimal digits a human would see, not on the
/// underlying binary expansion. Returns `None` for non-finite magnitudes
/// and non-positive counts.
pub(crate) fn round_to_sigfigs(value: f64, sigfigs: i32) -> Option<Rounded> {
    if !value.is_finite() || sigfigs <= 0 {
        return None;
    }
    let count = sigfigs as usize;
    if value == 0.0 {
        let mut digits = SmallVec::new();
        digits.resize(count, 0);
        return Some(Rounded {
            digits,
            msd: 0,
            negative: false,
        });
    }

    // "2.46912e5" -> digits [2,4,6,9,1,2], msd 5
    let shortest = format!("{:e}", value.abs());
    let (mantissa, exponent) = shortest.split_once('e')?;
    let mut msd: i32 = exponent.parse().ok()?;
    let mut digits: SmallVec<[u8; 24]> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() <= count {
        digits.resize(count, 0);
    } else {
        // Half away from zero: only the first dropped digit decides.
        let round_up = digits[count] >= 5;
        digits.truncate(count);
        if round_up {
            let mut place = count;
            loop {
                if place == 0 {
                    digits.insert(0, 1);
                    digits.truncate(count);
                    msd += 1;
                    break;
                }
                place -= 1;
                if digits[place] == 9 {
                    digits[place] = 0;
                } else {
                    digits[place] += 1;
                    break;
                }
            }
        }
    }

    Some(Rounded {
        digits,
        msd,
        negative: value < 0.0,
    })
}

fn push_digits(out: &mut String, digits: &[u8]) {
    for digit in digits {
        out.push((b'0' + digit) as char);
    }
}

/// Standard notation: digits placed against the decimal point per the msd,
/// zero-padded so exactly the entitled digits show.
fn render_standard(rounded: &Rounded) -> String {
    let count = rounded.digits.len() as i32;
    let mut out = String::new();
    if rounded.negative {
        out.push('-');
    }
    if rounded.msd >= 0 {
        let integer_len = rounded.msd + 1;
        if count > integer_len {
            push_digits(&mut out, &rounded.digits[..integer_len as usize]);
            out.push('.');
            push_digits(&mut out, &rounded.digits[integer_len as usize..]);
        } else {
            push_digits(&mut out, &rounded.digits);
            for _ in 0..integer_len - count {
                out.push('0');
            }
        }
    } else {
        out.push_str("0.");
        for _ in 0..-rounded.msd - 1 {
            out.push('0');
        }
        push_digits(&mut out, &rounded.digits);
    }
    out
}

/// Scientific notation: one leading digit, the rest after the point, then
/// `E` and the decimal exponent (no explicit `+`).
fn render_scientific(rounded: &Rounded) -> String {
    let mut out = String::new();
    if rounded.negative {
        out.push('-');
    }
    out.push((b'0' + rounded.digits[0]) as char);
    if rounded.digits.len() > 1 {
        out.push('.');
        push_digits(&mut out, &rounded.digits[1..]);
    }
    out.push('E');
    out.push_str(&rounded.msd.to_string());
    out
}

/// Precision-aware rendering of a value. Display is best-effort: degraded
/// values render as `"0"` and non-finite magnitudes fall back to the
/// ordinary float form rather than erroring.
pub(crate) fn display_string(value: SigFloat) -> String {
    let sigfigs = match value.sigfigs() {
        None => return value.value().to_string(),
        Some(count) if count <= 0 => return "0".to_string(),
        Some(count) => count,
    };
    let magnitude = value.value();
    let Some(rounded) = round_to_sigfigs(magnitude, sigfigs) else {
        return magnitude.to_string();
    };
    let standard = (0.001 < magnitude.abs() && magnitude.abs() < 1000.0) || magnitude == 0.0;
    if standard {
        render_standard(&rounded)
    } else {
        render_scientific(&rounded)
    }
}

impl fmt::Display for SigFloat {
    /// Renders the precision-rounded form. A format-spec precision
    /// (`{:.2}`) re-formats the already-rounded value at that many
    /// decimals; width and alignment apply to the final string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = display_string(*self);
        match f.precision() {
            Some(decimals) => {
                let rounded: f64 = display.parse().unwrap_or(self.value());
                f.pad(&format!("{:.*}", decimals, rounded))
            },
            None => f.pad(&display),
        }
    }
}

impl fmt::Debug for SigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sigfigs() {
            None => write!(f, "SigFloat({:?})", self.value()),
            Some(count) => write!(f, "SigFloat({:?}, {})", self.value(), count),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
