#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The text color with more contrast against a background swatch.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huepick.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    /// Get the CSS name of this color.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl std::fmt::Display for ContrastColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The YIQ brightness at or above which black text is preferred.
const BLACK_THRESHOLD: u32 = 128;

/// Compute the YIQ brightness `(299r + 587g + 114b) / 1000` of the 24-bit
/// color.
#[inline]
pub(crate) fn to_brightness(rgb: &[u8; 3]) -> u32 {
    let [r, g, b] = rgb.map(u32::from);
    (299 * r + 587 * g + 114 * b) / 1000
}

/// Pick black or white text for the given background.
pub(crate) fn to_contrast_color(rgb: &[u8; 3]) -> ContrastColor {
    if to_brightness(rgb) >= BLACK_THRESHOLD {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}
