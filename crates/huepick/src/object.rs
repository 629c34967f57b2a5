use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_hex, format_hsl, format_rgb, hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, parse,
    parse_hex_digits, rgb_to_hsv, to_contrast_color, to_eq_components, ColorMode, ContrastColor,
    Parsed,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A color in HSV with alpha.
///
/// This is the canonical representation of a color picker's color. The hue
/// ranges `0..=360` degrees, whereas saturation, value, and alpha have unit
/// range `0..=1`. RGB and HSL views, i.e., [`Rgb`] and [`Hsl`], are derived
/// from this representation on demand and never stored alongside.
///
/// # Equality Testing and Hashing
///
/// Like other floating point quantities, color components may suffer from
/// small rounding errors. Hence equality testing first reduces the hue to a
/// single rotation and then drops the least significant digits of each
/// component.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "huepick.color"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone)]
pub struct Color {
    h: Float,
    s: Float,
    v: Float,
    a: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Instantiate a new color with the given hue, saturation, value, and
    /// alpha. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(h: Float, s: Float, v: Float, a: Float) -> Self {
        Self::new(h, s, v, a)
    }

    /// Get the hue in degrees.
    pub fn hue(&self) -> Float {
        self.h
    }

    /// Get the saturation.
    pub fn saturation(&self) -> Float {
        self.s
    }

    /// Get the value.
    pub fn value(&self) -> Float {
        self.v
    }

    /// Get the alpha.
    pub fn alpha(&self) -> Float {
        self.a
    }

    /// Determine whether this color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Convert this color to its derived 24-bit RGB representation.
    ///
    /// ```
    /// # use huepick::{Color, Rgb};
    /// let orange = Color::new(30.0, 1.0, 1.0, 0.5);
    /// assert_eq!(orange.to_rgb(), Rgb::with_alpha(255, 128, 0, 0.5));
    /// ```
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsv_to_rgb(&[self.h, self.s, self.v]);
        Rgb::with_alpha(r, g, b, self.a)
    }

    /// Convert this color to its derived HSL representation.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = hsv_to_hsl(&[self.h, self.s, self.v]);
        Hsl::with_alpha(h, s, l, self.a)
    }

    /// Format this color in the given mode.
    ///
    /// In hex mode, the result is `#rrggbb` for opaque colors and
    /// `#rrggbbaa` otherwise. In RGB mode, it is `rgb(r, g, b)` or `rgba(r, g,
    /// b, a)` with two fractional digits for alpha. In HSL mode, it is `hsl(h,
    /// s%, l%)` or `hsla(h, s%, l%, a)`, again with two fractional digits for
    /// alpha and with hue and percentages rounded to integers.
    ///
    /// ```
    /// # use huepick::{Color, ColorMode};
    /// let red = Color::new(0.0, 1.0, 1.0, 0.5);
    /// assert_eq!(red.format(ColorMode::Hex), "#ff000080");
    /// assert_eq!(red.format(ColorMode::Rgb), "rgba(255, 0, 0, 0.50)");
    /// assert_eq!(red.format(ColorMode::Hsl), "hsla(0, 100%, 50%, 0.50)");
    /// ```
    pub fn format(&self, mode: ColorMode) -> String {
        self.format_with_case(mode, false)
    }

    /// Pick black or white text for a swatch of this color.
    ///
    /// The choice ignores alpha and is based on the YIQ brightness of the
    /// color's 24-bit RGB representation.
    pub fn contrast_color(&self) -> ContrastColor {
        let rgb = self.to_rgb();
        to_contrast_color(&[rgb.r, rgb.g, rgb.b])
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Color {
    /// Instantiate a new color with the given hue, saturation, value, and
    /// alpha.
    ///
    /// This constructor does not clamp its arguments. Use [`Color::clamped`]
    /// when they may be out of range.
    ///
    /// ```
    /// # use huepick::Color;
    /// let red = Color::new(0.0, 1.0, 1.0, 1.0);
    /// assert_eq!(red.to_string(), "#ff0000");
    /// ```
    pub const fn new(h: Float, s: Float, v: Float, a: Float) -> Self {
        Self { h, s, v, a }
    }

    /// Instantiate a new color after clamping the hue to `0..=360` and the
    /// other components to `0..=1`. Not-a-numbers become zero.
    pub fn clamped(h: Float, s: Float, v: Float, a: Float) -> Self {
        fn clamp(value: Float, max: Float) -> Float {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, max)
            }
        }

        Self::new(clamp(h, 360.0), clamp(s, 1.0), clamp(v, 1.0), clamp(a, 1.0))
    }

    /// Access the components as an array in hue, saturation, value, alpha
    /// order.
    pub const fn components(&self) -> [Float; 4] {
        [self.h, self.s, self.v, self.a]
    }

    /// Format this color in the given mode, with uppercase hexadecimal digits
    /// if so requested. Other modes ignore the case.
    pub fn format_with_case(&self, mode: ColorMode, uppercase: bool) -> String {
        let rgb = self.to_rgb();
        match mode {
            ColorMode::Hex => format_hex(&[rgb.r, rgb.g, rgb.b], self.a, uppercase),
            ColorMode::Rgb => format_rgb(&[rgb.r, rgb.g, rgb.b], self.a),
            ColorMode::Hsl => {
                let hsl = self.to_hsl();
                format_hsl(&[hsl.h, hsl.s, hsl.l], self.a)
            }
        }
    }

    /// Parse a color, optionally accepting hex colors without leading `#`.
    pub(crate) fn parse_with(s: &str, lenient: bool) -> Result<Self, ColorFormatError> {
        Ok(match parse(s, lenient)? {
            Parsed::Rgb([r, g, b], a) => Rgb::with_alpha(r, g, b, a).into(),
            Parsed::Hsl([h, s, l], a) => Hsl::with_alpha(h, s, l, a).into(),
        })
    }
}

impl Default for Color {
    /// Create an instance of the default color, which is an opaque, fully
    /// saturated red.
    ///
    /// ```
    /// # use huepick::Color;
    /// assert_eq!(Color::default().components(), [0.0, 1.0, 1.0, 1.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0, 1.0)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method recognizes hashed hexadecimal colors with three, six, or
    /// eight digits, e.g., `#0f0`, `#00ff00`, and `#00ff0080`, as well as
    /// `rgb()`, `rgba()`, `hsl()`, and `hsla()` colors with comma-separated
    /// arguments. RGB channels must be integers `0..=255`, hues `0..=360`,
    /// saturation and lightness percentages `0..=100`, and alpha `0..=1`.
    /// Parsing ignores surrounding white space and ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huepick::Color;
    /// # use huepick::error::ColorFormatError;
    /// let green: Color = "#0f0".parse()?;
    /// assert_eq!(green, "rgb(0, 255, 0)".parse::<Color>()?);
    /// assert_eq!(green, "hsl(120, 100%, 50%)".parse::<Color>()?);
    /// assert!("not-a-color".parse::<Color>().is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, false)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        let [h, s, v] = rgb_to_hsv(&[value.r, value.g, value.b]);
        Self::new(h, s, v, value.a)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        let [h, s, v] = hsl_to_hsv(&[value.h, value.s, value.l]);
        Self::new(h, s, v, value.a)
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_components(&self.components()).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        let (c1, c2) = (self.components(), other.components());
        c1 == c2 || to_eq_components(&c1) == to_eq_components(&c2)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Color(h={}, s={}, v={}, a={})",
            self.h, self.s, self.v, self.a
        )
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation. The alternate flag
    /// selects uppercase digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_with_case(ColorMode::Hex, f.alternate()))
    }
}

// ====================================================================================================================

/// A 24-bit RGB color with alpha.
///
/// This is a derived representation of a [`Color`]. Channels are integers
/// `0..=255` and alpha has unit range.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "huepick.color"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub r: u8,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub g: u8,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub b: u8,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub a: Float,
}

impl Rgb {
    /// Create a new opaque RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new RGB color with the given alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: Float) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new RGB color from possibly out-of-range integers. Channels
    /// are clamped to `0..=255` and alpha to `0..=1`.
    pub fn clamped(r: i64, g: i64, b: i64, a: Float) -> Self {
        // Clamping makes the conversion lossless.
        let channel = |c: i64| c.clamp(0, 255) as u8;
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self::with_alpha(channel(r), channel(g), channel(b), a)
    }

    /// Parse a hexadecimal color with three, six, or eight digits. The
    /// leading `#` is optional.
    ///
    /// ```
    /// # use huepick::Rgb;
    /// # use huepick::error::ColorFormatError;
    /// assert_eq!(Rgb::from_hex("#0f0")?, Rgb::new(0, 255, 0));
    /// assert_eq!(Rgb::from_hex("FF000080")?.a, 128.0 / 255.0);
    /// assert_eq!(Rgb::from_hex("#ff00"), Err(ColorFormatError::UnexpectedCharacters));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        let ([r, g, b], a) = parse_hex_digits(digits)?;
        Ok(Self::with_alpha(r, g, b, a))
    }

    /// Format this color in lowercase hashed hexadecimal notation. The result
    /// has six digits for opaque colors and eight digits otherwise.
    pub fn to_hex_format(&self) -> String {
        format_hex(&[self.r, self.g, self.b], self.a, false)
    }

    /// Access the channels as an array.
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.to_rgb()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_rgb(&self.channels(), self.a))
    }
}

// ====================================================================================================================

/// An HSL color with alpha.
///
/// This is a derived representation of a [`Color`]. The hue ranges `0..=360`
/// degrees, whereas saturation, lightness, and alpha have unit range.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "huepick.color"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub h: Float,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub s: Float,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub l: Float,
    #[cfg_attr(feature = "pyffi", pyo3(get))]
    pub a: Float,
}

impl Hsl {
    /// Create a new opaque HSL color.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Create a new HSL color with the given alpha.
    pub const fn with_alpha(h: Float, s: Float, l: Float, a: Float) -> Self {
        Self { h, s, l, a }
    }
}

impl From<Color> for Hsl {
    fn from(value: Color) -> Self {
        value.to_hsl()
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hsl(&[self.h, self.s, self.l], self.a))
    }
}

// ====================================================================================================================

/// Parse a color string into a canonical color.
///
/// This function is the same as [`Color as
/// FromStr`](struct.Color.html#impl-FromStr-for-Color).
pub fn parse_color_string(s: &str) -> Result<Color, ColorFormatError> {
    Color::from_str(s)
}

/// Parse a hexadecimal color into its RGB representation.
///
/// This function is the same as [`Rgb::from_hex`].
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorFormatError> {
    Rgb::from_hex(s)
}

/// Format an RGB color in lowercase hashed hexadecimal notation.
///
/// This function is the same as [`Rgb::to_hex_format`].
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    rgb.to_hex_format()
}

/// Pick black or white text for a swatch with the given background color.
///
/// ```
/// # use huepick::{contrast_color, ContrastColor};
/// # use huepick::error::ColorFormatError;
/// assert_eq!(contrast_color("#ffffff")?, ContrastColor::Black);
/// assert_eq!(contrast_color("#ff0000")?, ContrastColor::White);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_color(background: &str) -> Result<ContrastColor, ColorFormatError> {
    Ok(Color::from_str(background)?.contrast_color())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{contrast_color, hex_to_rgb, parse_color_string, rgb_to_hex, Color, Hsl, Rgb};
    use crate::core::assert_within;
    use crate::error::ColorFormatError;
    use crate::{ColorMode, ContrastColor, Float};

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        let green = parse_color_string("#0f0")?;
        assert_eq!(green, parse_color_string("#00ff00")?);
        assert_eq!(green.components(), [120.0, 1.0, 1.0, 1.0]);

        let red = parse_color_string("#ff000080")?;
        assert_within!(red.alpha(), 0.5, 0.01);

        let blue = parse_color_string("hsl(240, 100%, 50%)")?;
        assert_eq!(blue.format(ColorMode::Hex), "#0000ff");

        let orange = parse_color_string("rgb(255, 128, 0)")?;
        assert_eq!(orange.format(ColorMode::Hex), "#ff8000");

        assert_eq!(
            parse_color_string("#zzz"),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(
            parse_color_string("not-a-color"),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for hex in ["#000000", "#ffffff", "#abcdef", "#0a0b0c", "#ff8000"] {
            assert_eq!(rgb_to_hex(&hex_to_rgb(hex)?), hex);
            assert_eq!(rgb_to_hex(&hex_to_rgb(&hex.to_uppercase())?), hex);
        }
        assert_eq!(rgb_to_hex(&hex_to_rgb("#ff000080")?), "#ff000080");
        assert_eq!(rgb_to_hex(&Rgb::clamped(300, -4, 16, 1.0)), "#ff0010");
        Ok(())
    }

    #[test]
    fn test_format() {
        let red = Color::new(0.0, 1.0, 1.0, 0.5);
        assert_eq!(red.format(ColorMode::Rgb), "rgba(255, 0, 0, 0.50)");

        let red = Color::default();
        assert_eq!(red.format(ColorMode::Hex), "#ff0000");
        assert_eq!(red.format(ColorMode::Rgb), "rgb(255, 0, 0)");
        assert_eq!(red.format(ColorMode::Hsl), "hsl(0, 100%, 50%)");

        let sky = Color::from(Rgb::new(0xab, 0xcd, 0xef));
        assert_eq!(sky.format(ColorMode::Hsl), "hsl(210, 68%, 80%)");
        assert_eq!(sky.format_with_case(ColorMode::Hex, true), "#ABCDEF");
        assert_eq!(format!("{:#}", sky), "#ABCDEF");
        assert_eq!(sky.to_rgb().to_string(), "rgb(171, 205, 239)");
    }

    #[test]
    fn test_derived() {
        let color = Color::from(Hsl::with_alpha(200.0, 0.5, 0.5, 0.3));
        let hsl = color.to_hsl();
        assert_within!(hsl.h, 200.0, 1e-9);
        assert_within!(hsl.s, 0.5, 1e-9);
        assert_within!(hsl.l, 0.5, 1e-9);
        assert_eq!(hsl.a, 0.3);
        assert!(color.format(ColorMode::Hsl).starts_with("hsla("));
        assert_eq!(hsl.to_string(), "hsla(200, 50%, 50%, 0.30)");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            Color::new(360.0, 1.0, 1.0, 1.0),
            Color::new(0.0, 1.0, 1.0, 1.0)
        );
        assert_ne!(Color::new(0.0, 1.0, 1.0, 1.0), Color::new(0.0, 1.0, 1.0, 0.5));
        assert_eq!(
            Color::clamped(400.0, -1.0, 2.0, Float::NAN).components(),
            [360.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Color::new(0.0, 0.0, 1.0, 1.0).contrast_color(), ContrastColor::Black);
        assert_eq!(Color::new(0.0, 0.0, 0.0, 1.0).contrast_color(), ContrastColor::White);
        assert_eq!(Color::default().contrast_color(), ContrastColor::White);
    }

    #[test]
    fn test_contrast_color_string() -> Result<(), ColorFormatError> {
        assert_eq!(contrast_color("#ffffff")?, ContrastColor::Black);
        assert_eq!(contrast_color("#000000")?, ContrastColor::White);
        assert_eq!(contrast_color("rgb(255, 255, 0)")?, ContrastColor::Black);
        assert_eq!(contrast_color("hsl(0, 100%, 50%)")?, ContrastColor::White);
        assert!(contrast_color("nope").is_err());
        Ok(())
    }
}
