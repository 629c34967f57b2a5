use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two quantities differ by at most the given
/// tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

/// The factor for dropping the least significant digits before comparison.
#[cfg(feature = "f64")]
const ROUNDING_FACTOR: Float = 1e12;
#[cfg(not(feature = "f64"))]
const ROUNDING_FACTOR: Float = 1e5;

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize the four components of a color for equality testing and
/// hashing. Hues are reduced to a single rotation first, so that 0º and 360º
/// compare equal.
#[must_use = "function returns new bits and does not mutate original value"]
pub(crate) fn to_eq_components(components: &[Float; 4]) -> [Bits; 4] {
    let [h, s, v, a] = *components;
    let h = h.rem_euclid(360.0);

    [to_eq_bits(h), to_eq_bits(s), to_eq_bits(v), to_eq_bits(a)]
}
