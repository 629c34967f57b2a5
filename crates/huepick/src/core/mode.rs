#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;

/// The enumeration of display modes.
///
/// A color mode selects the textual representation used when exporting a
/// color, i.e., hashed hexadecimal, `rgb()`, or `hsl()` notation. It is
/// independent of the color itself. The modes form a cycle, with
/// [`ColorMode::next`] advancing from hex to RGB to HSL and back to hex.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huepick.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorMode {
    /// Get the mode following this one in the cycle hex, RGB, HSL.
    ///
    /// ```
    /// # use huepick::ColorMode;
    /// let mode = ColorMode::Hex.next().next().next();
    /// assert_eq!(mode, ColorMode::Hex);
    /// ```
    pub const fn next(&self) -> Self {
        match *self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hsl,
            Self::Hsl => Self::Hex,
        }
    }

    /// Get this mode's lowercase name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    /// Create a human-readable representation for this mode. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = ColorFormatError;

    /// Parse a color mode from its name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(ColorFormatError::UnknownFormat),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ColorMode;
    use crate::error::ColorFormatError;

    #[test]
    fn test_cycle() {
        let mut mode = ColorMode::default();
        assert_eq!(mode, ColorMode::Hex);
        mode = mode.next();
        assert_eq!(mode, ColorMode::Rgb);
        mode = mode.next();
        assert_eq!(mode, ColorMode::Hsl);
        mode = mode.next();
        assert_eq!(mode, ColorMode::Hex);
    }

    #[test]
    fn test_names() -> Result<(), ColorFormatError> {
        for mode in [ColorMode::Hex, ColorMode::Rgb, ColorMode::Hsl] {
            assert_eq!(mode.to_string().parse::<ColorMode>()?, mode);
        }
        assert_eq!(" HSL ".parse::<ColorMode>()?, ColorMode::Hsl);
        assert!("cmyk".parse::<ColorMode>().is_err());
        Ok(())
    }
}
