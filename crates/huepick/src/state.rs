//! The mutable color state behind a color picker.
//!
//! A [`ColorState`] owns one canonical [`Color`] in HSV with alpha and the
//! current [`ColorMode`]. Its accessors expose the color as hex string, as
//! RGB channels, and as HSL coordinates. Every getter derives its result from
//! the canonical color, and every setter converts its input back into that
//! color, so the representations cannot diverge.
//!
//! Setters for individual channels clamp their inputs. Setters for strings
//! parse their inputs and return `false`, leaving the state untouched, if the
//! input is malformed. That way, a user interface can flag the input field
//! without further ado.
//!
//! # Example
//!
//! ```
//! # use huepick::{ColorMode, ColorState};
//! let mut state = ColorState::new();
//! assert!(state.set_color_from_string("hsl(200, 50%, 50%)"));
//! state.set_hsl_l(0.25);
//! assert_eq!(state.hex(), "204a60");
//!
//! state.set_rgb_r(255.0);
//! state.toggle_mode();
//! assert_eq!(state.export_color(), "rgb(255, 74, 96)");
//!
//! assert!(!state.set_color_from_string("not-a-color"));
//! assert_eq!(state.export_color(), "rgb(255, 74, 96)");
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use rand::Rng;
use tracing::{debug, trace};

use crate::opt::Options;
use crate::{Color, ColorMode, ContrastColor, Float, Hsl, Rgb};

/// A partial update for the canonical color.
///
/// Components that are `None` are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorUpdate {
    pub h: Option<Float>,
    pub s: Option<Float>,
    pub v: Option<Float>,
    pub a: Option<Float>,
}

/// Clamp the value, treating not-a-number as no value at all.
#[inline]
fn clamp(value: Float, max: Float) -> Option<Float> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(0.0, max))
    }
}

/// A color picker's state.
///
/// Color state is owned by the caller, typically one instance per open
/// picker. It is a plain value without interior mutability, so concurrent
/// writers need to bring their own lock.
#[cfg_attr(feature = "pyffi", pyclass(module = "huepick.color"))]
#[derive(Clone, Debug)]
pub struct ColorState {
    color: Color,
    mode: ColorMode,
    uppercase_hex: bool,
    lenient_hex: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorState {
    /// Create a new color state with the default options. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new() -> Self {
        Self::new()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the canonical color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color with the one described by the given string.
    ///
    /// This method accepts the same formats as [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color), plus hex colors
    /// without leading `#` if the state was created with lenient hex parsing,
    /// which is the default. It returns `false` and leaves the color as is if
    /// the string cannot be parsed.
    pub fn set_color_from_string(&mut self, s: &str) -> bool {
        match Color::parse_with(s, self.lenient_hex) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(error) => {
                debug!(input = s, %error, "ignoring malformed color string");
                false
            }
        }
    }

    /// Get the current display mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Set the display mode.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    /// Advance the display mode from hex to RGB to HSL and back to hex.
    /// This method returns the new mode.
    pub fn toggle_mode(&mut self) -> ColorMode {
        self.mode = self.mode.next();
        trace!(mode = %self.mode, "toggled color mode");
        self.mode
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the hue in degrees.
    pub fn hue(&self) -> Float {
        self.color.hue()
    }

    /// Set the hue after clamping it to `0..=360`. Note that 360º is not
    /// wrapped around to 0º.
    pub fn set_hue(&mut self, hue: Float) {
        if let Some(h) = clamp(hue, 360.0) {
            let [_, s, v, a] = self.color.components();
            self.color = Color::new(h, s, v, a);
        }
    }

    /// Get the alpha.
    pub fn alpha(&self) -> Float {
        self.color.alpha()
    }

    /// Set the alpha after clamping it to `0..=1`.
    pub fn set_alpha(&mut self, alpha: Float) {
        if let Some(a) = clamp(alpha, 1.0) {
            let [h, s, v, _] = self.color.components();
            self.color = Color::new(h, s, v, a);
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the color as hexadecimal digits without leading `#`.
    ///
    /// The result has six digits for opaque colors and eight digits
    /// otherwise.
    pub fn hex(&self) -> String {
        let hashed = self
            .color
            .format_with_case(ColorMode::Hex, self.uppercase_hex);
        hashed.trim_start_matches('#').to_owned()
    }

    /// Set the color from hexadecimal digits with or without leading `#`.
    /// This method returns `false` and leaves the color as is if the digits
    /// are malformed.
    pub fn set_hex(&mut self, hex: &str) -> bool {
        let hex = hex.trim();
        let result = if hex.starts_with('#') {
            Color::parse_with(hex, false)
        } else {
            Color::parse_with(&format!("#{}", hex), false)
        };

        match result {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(error) => {
                debug!(input = hex, %error, "ignoring malformed hex color");
                false
            }
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the derived HSL representation.
    pub fn hsl(&self) -> Hsl {
        self.color.to_hsl()
    }

    /// Get the HSL hue in degrees.
    pub fn hsl_h(&self) -> Float {
        self.hsl().h
    }

    /// Get the HSL saturation.
    pub fn hsl_s(&self) -> Float {
        self.hsl().s
    }

    /// Get the HSL lightness.
    pub fn hsl_l(&self) -> Float {
        self.hsl().l
    }

    /// Set the HSL hue after clamping it to `0..=360`.
    ///
    /// HSV and HSL share the hue, so this setter leaves the other components
    /// of the canonical color untouched.
    pub fn set_hsl_h(&mut self, hue: Float) {
        self.set_hue(hue);
    }

    /// Set the HSL saturation after clamping it to `0..=1`, holding HSL hue
    /// and lightness fixed.
    pub fn set_hsl_s(&mut self, saturation: Float) {
        if let Some(s) = clamp(saturation, 1.0) {
            let hsl = self.hsl();
            self.color = Hsl::with_alpha(hsl.h, s, hsl.l, hsl.a).into();
        }
    }

    /// Set the HSL lightness after clamping it to `0..=1`, holding HSL hue
    /// and saturation fixed.
    pub fn set_hsl_l(&mut self, lightness: Float) {
        if let Some(l) = clamp(lightness, 1.0) {
            let hsl = self.hsl();
            self.color = Hsl::with_alpha(hsl.h, hsl.s, l, hsl.a).into();
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the derived 24-bit RGB representation.
    pub fn rgb(&self) -> Rgb {
        self.color.to_rgb()
    }

    /// Get the red channel.
    pub fn rgb_r(&self) -> u8 {
        self.rgb().r
    }

    /// Get the green channel.
    pub fn rgb_g(&self) -> u8 {
        self.rgb().g
    }

    /// Get the blue channel.
    pub fn rgb_b(&self) -> u8 {
        self.rgb().b
    }

    /// Set the red channel after rounding and clamping it to `0..=255`.
    pub fn set_rgb_r(&mut self, red: Float) {
        self.set_rgb_channel(0, red);
    }

    /// Set the green channel after rounding and clamping it to `0..=255`.
    pub fn set_rgb_g(&mut self, green: Float) {
        self.set_rgb_channel(1, green);
    }

    /// Set the blue channel after rounding and clamping it to `0..=255`.
    pub fn set_rgb_b(&mut self, blue: Float) {
        self.set_rgb_channel(2, blue);
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format the color in the current display mode.
    ///
    /// See [`Color::format`] for the three formats. With uppercase hex
    /// enabled, hex mode uses uppercase digits.
    pub fn export_color(&self) -> String {
        self.color.format_with_case(self.mode, self.uppercase_hex)
    }

    /// Replace the color with a random opaque color.
    pub fn random_color(&mut self) {
        self.random_color_with(&mut rand::rng());
    }

    /// Pick black or white text for a swatch of the current color.
    pub fn contrast_color(&self) -> ContrastColor {
        self.color.contrast_color()
    }

    /// Convert this color state to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl ColorState {
    /// Create a new color state with the default options.
    ///
    /// The color is an opaque, fully saturated red and the mode is hex.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create a new color state with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self {
            color: options.color(),
            mode: options.mode(),
            uppercase_hex: options.uppercase_hex(),
            lenient_hex: options.lenient_hex(),
        }
    }

    /// Merge the given components into the canonical color.
    ///
    /// Unlike the setters for individual channels, this method does not
    /// clamp its inputs.
    pub fn set_color(&mut self, update: ColorUpdate) {
        let [h, s, v, a] = self.color.components();
        self.color = Color::new(
            update.h.unwrap_or(h),
            update.s.unwrap_or(s),
            update.v.unwrap_or(v),
            update.a.unwrap_or(a),
        );
    }

    /// Replace the color with a random opaque color drawn from the given
    /// source of randomness.
    ///
    /// The hue is uniformly distributed over `0..360`, saturation and value
    /// over `0..1`.
    pub fn random_color_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let h: Float = rng.random_range(0.0..360.0);
        let s: Float = rng.random();
        let v: Float = rng.random();
        self.color = Color::new(h, s, v, 1.0);
        trace!(color = ?self.color, "picked random color");
    }

    fn set_rgb_channel(&mut self, index: usize, value: Float) {
        if value.is_nan() {
            return;
        }

        let rgb = self.rgb();
        let mut channels = rgb.channels().map(i64::from);
        // Float to integer casts saturate.
        channels[index] = value.round() as i64;
        let [r, g, b] = channels;
        self.color = Rgb::clamped(r, g, b, rgb.a).into();
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

// ====================================================================================================================
