//! Color harmonies, i.e., palettes of colors related to a base color.
//!
//! The generator is stateless. It parses the base color into HSL with
//! saturation and lightness as percentages, derives the palette's HSL
//! coordinates from fixed tables of hue, saturation, and lightness offsets,
//! and then formats each coordinate triple in the requested [`ColorMode`].
//! Generated colors are always opaque.
//!
//! ```
//! # use huepick::{generate_color_harmony, ColorMode};
//! # use huepick::error::HarmonyError;
//! let palette = generate_color_harmony("#ff0000", "triadic", ColorMode::Hex)?;
//! assert_eq!(palette.len(), 6);
//! assert_eq!(palette[1], "#ff0000");
//! assert_eq!(palette[3], "#00ff00");
//! assert_eq!(palette[5], "#0000ff");
//! # Ok::<(), HarmonyError>(())
//! ```

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use tracing::debug;

use crate::core::{
    format_hex, format_hsl, format_rgb, hsl_to_rgb, normalize_hue, parse, rgb_to_hsl, Parsed,
};
use crate::error::{ColorFormatError, HarmonyError};
use crate::{ColorMode, Float};

/// Saturation and lightness offsets for monochromatic palettes, from
/// desaturated and light to saturated and dark.
const MONOCHROMATIC: [(Float, Float); 7] = [
    (-30.0, 30.0),
    (-20.0, 20.0),
    (-10.0, 10.0),
    (0.0, 0.0),
    (10.0, -10.0),
    (20.0, -20.0),
    (30.0, -30.0),
];

/// Saturation and lightness offsets for the light, base, and dark variants of
/// a hue.
const VARIANTS: [(Float, Float); 3] = [(-10.0, 15.0), (0.0, 0.0), (10.0, -15.0)];

/// Hue offsets for analogous palettes.
const ANALOGOUS: [Float; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];

#[inline]
fn vary(hue: Float, saturation: Float, lightness: Float, offsets: (Float, Float)) -> [Float; 3] {
    [
        normalize_hue(hue),
        (saturation + offsets.0).clamp(0.0, 100.0),
        (lightness + offsets.1).clamp(0.0, 100.0),
    ]
}

/// The enumeration of harmony schemes.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "huepick.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    Monochromatic,
    Complementary,
    Triadic,
    Analogous,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl HarmonyScheme {
    /// Get this scheme's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
        }
    }

    /// Get the number of colors in this scheme's palettes.
    pub const fn size(&self) -> usize {
        match *self {
            Self::Monochromatic => 7,
            Self::Complementary | Self::Triadic => 6,
            Self::Analogous => 5,
        }
    }
}

impl HarmonyScheme {
    /// All harmony schemes in the order used by [`Harmonies`].
    pub const ALL: [HarmonyScheme; 4] = [
        Self::Monochromatic,
        Self::Complementary,
        Self::Triadic,
        Self::Analogous,
    ];

    /// Generate the palette for the base color.
    ///
    /// Both base color and palette are HSL coordinates with the hue in
    /// degrees and saturation and lightness as percentages `0..=100`.
    ///
    /// ```
    /// # use huepick::HarmonyScheme;
    /// let palette = HarmonyScheme::Complementary.generate(&[30.0, 80.0, 50.0]);
    /// assert_eq!(palette[1], [30.0, 80.0, 50.0]);
    /// assert_eq!(palette[4], [210.0, 80.0, 50.0]);
    /// ```
    pub fn generate(&self, base: &[Float; 3]) -> Vec<[Float; 3]> {
        let [h, s, l] = *base;

        match *self {
            Self::Monochromatic => MONOCHROMATIC
                .iter()
                .map(|offsets| vary(h, s, l, *offsets))
                .collect(),
            Self::Complementary => [h, h + 180.0]
                .iter()
                .flat_map(|hue| VARIANTS.iter().map(move |offsets| vary(*hue, s, l, *offsets)))
                .collect(),
            Self::Triadic => [h, h + 120.0, h + 240.0]
                .iter()
                .flat_map(|hue| {
                    VARIANTS[..2]
                        .iter()
                        .map(move |offsets| vary(*hue, s, l, *offsets))
                })
                .collect(),
            Self::Analogous => ANALOGOUS
                .iter()
                .enumerate()
                .map(|(index, offset)| {
                    let step = index as Float - 2.0;
                    [
                        normalize_hue(h + offset),
                        (s + step * 5.0).clamp(20.0, 100.0),
                        (l - step * 3.0).clamp(15.0, 85.0),
                    ]
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = HarmonyError;

    /// Parse a scheme name. Monochromatic palettes go by `mono` or
    /// `monochromatic`. Names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochromatic" => Ok(Self::Monochromatic),
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            "analogous" => Ok(Self::Analogous),
            _ => Err(HarmonyError::InvalidScheme(s.to_owned())),
        }
    }
}

// ====================================================================================================================

/// Parse a color string into HSL coordinates with saturation and lightness
/// as percentages.
///
/// This function accepts hashed hexadecimal, `rgb()`, and `hsl()` colors
/// including their alpha variants, but ignores alpha. HSL colors pass through
/// without conversion.
///
/// ```
/// # use huepick::parse_color_to_hsl;
/// # use huepick::error::ColorFormatError;
/// assert_eq!(parse_color_to_hsl("hsl(120, 50%, 25%)")?, [120.0, 50.0, 25.0]);
/// assert_eq!(parse_color_to_hsl("#ffffff")?, [0.0, 0.0, 100.0]);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn parse_color_to_hsl(color: &str) -> Result<[Float; 3], ColorFormatError> {
    let [h, s, l] = match parse(color, false)? {
        Parsed::Rgb(rgb, _) => rgb_to_hsl(&rgb),
        Parsed::Hsl(hsl, _) => hsl,
    };
    Ok([h, s * 100.0, l * 100.0])
}

/// Format the opaque HSL color in the given mode.
///
/// The hue is in degrees and saturation and lightness are percentages. They
/// are clamped to `0..=100`.
///
/// ```
/// # use huepick::{format_color, ColorMode};
/// assert_eq!(format_color(120.0, 100.0, 50.0, ColorMode::Hex), "#00ff00");
/// assert_eq!(format_color(120.0, 100.0, 50.0, ColorMode::Rgb), "rgb(0, 255, 0)");
/// assert_eq!(format_color(120.0, 100.0, 50.0, ColorMode::Hsl), "hsl(120, 100%, 50%)");
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn format_color(h: Float, s: Float, l: Float, mode: ColorMode) -> String {
    let hsl = [
        normalize_hue(h),
        s.clamp(0.0, 100.0) / 100.0,
        l.clamp(0.0, 100.0) / 100.0,
    ];

    match mode {
        ColorMode::Hex => format_hex(&hsl_to_rgb(&hsl), 1.0, false),
        ColorMode::Rgb => format_rgb(&hsl_to_rgb(&hsl), 1.0),
        ColorMode::Hsl => format_hsl(&hsl, 1.0),
    }
}

fn format_palette(palette: &[[Float; 3]], mode: ColorMode) -> Vec<String> {
    palette
        .iter()
        .map(|[h, s, l]| format_color(*h, *s, *l, mode))
        .collect()
}

/// Generate the harmony with the given scheme name for the color.
///
/// This function fails with [`HarmonyError::InvalidScheme`] if the scheme
/// name is not recognized and with [`HarmonyError::Color`] if the color
/// string cannot be parsed.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn generate_color_harmony(
    color: &str,
    scheme: &str,
    mode: ColorMode,
) -> Result<Vec<String>, HarmonyError> {
    let scheme = HarmonyScheme::from_str(scheme).inspect_err(|error| {
        debug!(%error, "rejecting harmony request");
    })?;
    let base = parse_color_to_hsl(color)?;
    Ok(format_palette(&scheme.generate(&base), mode))
}

/// All four harmonies for one base color.
#[cfg_attr(feature = "pyffi", pyclass(get_all, frozen, module = "huepick.color"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Harmonies {
    pub monochromatic: Vec<String>,
    pub complementary: Vec<String>,
    pub triadic: Vec<String>,
    pub analogous: Vec<String>,
}

impl Harmonies {
    /// Get the palette for the given scheme.
    pub fn get(&self, scheme: HarmonyScheme) -> &[String] {
        match scheme {
            HarmonyScheme::Monochromatic => &self.monochromatic,
            HarmonyScheme::Complementary => &self.complementary,
            HarmonyScheme::Triadic => &self.triadic,
            HarmonyScheme::Analogous => &self.analogous,
        }
    }
}

/// Generate all four harmonies for the color.
///
/// The color string is parsed only once.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn generate_color_harmonies(
    color: &str,
    mode: ColorMode,
) -> Result<Harmonies, ColorFormatError> {
    let base = parse_color_to_hsl(color)?;
    let palette = |scheme: HarmonyScheme| format_palette(&scheme.generate(&base), mode);

    Ok(Harmonies {
        monochromatic: palette(HarmonyScheme::Monochromatic),
        complementary: palette(HarmonyScheme::Complementary),
        triadic: palette(HarmonyScheme::Triadic),
        analogous: palette(HarmonyScheme::Analogous),
    })
}

// ====================================================================================================================
