//! Decimal rounding applied after arithmetic.

use std::fmt;

/// The number of decimal digits arithmetic results are rounded to.
///
/// Rounding after every elementwise operation keeps results like `0.1 + 0.2` from drifting away
/// from the decimal value a user would expect. The precision is picked when a vector is built
/// (see `with_precision` on the vector types) and never changes afterwards.
///
/// # Examples
///
/// ```
/// # use vectormaster::*;
/// assert_eq!(Precision::DEFAULT.round(0.1 + 0.2), 0.3);
/// assert_eq!(Precision::new(2).round(3.14159), 3.14);
/// assert_eq!(Precision::NONE.round(0.1 + 0.2), 0.1 + 0.2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(Option<u8>);

impl Precision {
    /// 14 decimal digits.
    pub const DEFAULT: Self = Self(Some(14));

    /// Disables rounding entirely.
    pub const NONE: Self = Self(None);

    /// Rounds to `digits` decimal digits after the decimal point.
    pub const fn new(digits: u8) -> Self {
        Self(Some(digits))
    }

    /// Returns the configured number of digits, or `None` if rounding is disabled.
    pub const fn digits(self) -> Option<u8> {
        self.0
    }

    /// Rounds `value` to the configured number of decimal digits.
    ///
    /// The exact binary value of `value` is rounded to the nearest decimal with `digits` fraction
    /// digits, and the closest `f64` to that decimal is returned. Exact ties go to the even digit.
    /// A value that is already the closest `f64` to such a decimal is returned unchanged, as are
    /// infinities and NaN.
    pub fn round(self, value: f64) -> f64 {
        let Some(digits) = self.0 else {
            return value;
        };
        if !value.is_finite() {
            return value;
        }
        // `value * 10^digits` is itself inexact for two-digit values at 14 digits, so go through
        // the formatter, which rounds the exact decimal expansion.
        let prec = usize::from(digits);
        let rounded = match format!("{value:.prec$}").parse::<f64>() {
            Ok(rounded) => rounded,
            Err(_) => return value,
        };
        // keep the sign of values that round to zero from the negative side
        if rounded == 0.0 {
            0.0f64.copysign(value)
        } else {
            rounded
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(digits) => write!(f, "Precision({digits})"),
            None => f.write_str("Precision(none)"),
        }
    }
}
