//! Utility module with huepick's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Like the parser it describes, this enumeration sticks to unit variants.
/// The color state setters only report success or failure anyway, and
/// callers of [`parse_color_string`](crate::parse_color_string) mostly care
/// about the broad category of the mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb(`, or `hsl(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A hashed hexadecimal color with a non-hexadecimal digit, e.g., `#0g0`.
    MalformedHex,

    /// A functional color format without the opening parenthesis. For
    /// example, `rgb 1, 2, 3)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `hsl(120, 50%, 50%` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A functional color format that is missing a coordinate. For example,
    /// `rgb(1, 2)` is missing the blue channel.
    MissingCoordinate,

    /// A functional color format with more than four coordinates.
    TooManyCoordinates,

    /// A coordinate that is not a number or not the expected kind of number.
    /// For example, `rgb(1.5, 2, 3)` has a fractional red channel.
    MalformedNumber,

    /// A coordinate outside its valid range, e.g., `rgb(256, 0, 0)` or
    /// `hsla(0, 0%, 0%, 1.5)`.
    OutOfRange,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb(`, `rgba(`, `hsl(`, or `hsla(`",
            ),
            UnexpectedCharacters => {
                f.write_str("hex color should have 3, 6, or 8 hexadecimal digits")
            }
            MalformedHex => {
                f.write_str("hex color should contain hexadecimal digits only but does not")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            TooManyCoordinates => {
                f.write_str("color format should have at most 4 coordinates but has more")
            }
            MalformedNumber => {
                f.write_str("color format coordinates should be numbers but one is not")
            }
            OutOfRange => f.write_str("color format coordinate is out of range"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while generating color harmonies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarmonyError {
    /// The scheme name is not one of `mono`, `complementary`, `triadic`, or
    /// `analogous`.
    InvalidScheme(String),

    /// The base color could not be parsed.
    Color(ColorFormatError),
}

impl std::fmt::Display for HarmonyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScheme(name) => write!(f, "invalid harmony type `{}`", name),
            Self::Color(_) => f.write_str("could not parse base color for harmony"),
        }
    }
}

impl std::error::Error for HarmonyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidScheme(_) => None,
            Self::Color(error) => Some(error),
        }
    }
}

impl From<ColorFormatError> for HarmonyError {
    fn from(value: ColorFormatError) -> Self {
        Self::Color(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<HarmonyError> for PyErr {
    fn from(value: HarmonyError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
