//! Helper module with the options for creating color state.
//!
//! This module provides the options for a [`ColorState`](crate::ColorState)
//! and the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use huepick::{ColorMode, ColorState};
//! # use huepick::opt::Options;
//! let options = Options::builder()
//!     .mode(ColorMode::Rgb)
//!     .uppercase_hex(true)
//!     .build();
//!
//! let state = ColorState::with_options(&options);
//! assert_eq!(state.mode(), ColorMode::Rgb);
//! assert_eq!(state.hex(), "FF0000");
//! ```

use crate::{Color, ColorMode};

#[derive(Clone, Debug)]
struct OptionData {
    color: Color,
    mode: ColorMode,
    uppercase_hex: bool,
    lenient_hex: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            color: Color::new(0.0, 1.0, 1.0, 1.0),
            mode: ColorMode::Hex,
            uppercase_hex: false,
            lenient_hex: true,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the initial color.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.0.color = color;
        self
    }

    /// Set the initial display mode.
    pub fn mode(&mut self, mode: ColorMode) -> &mut Self {
        self.0.mode = mode;
        self
    }

    /// Set whether hexadecimal output uses uppercase digits.
    pub fn uppercase_hex(&mut self, uppercase: bool) -> &mut Self {
        self.0.uppercase_hex = uppercase;
        self
    }

    /// Set whether color strings may omit the leading `#` of hexadecimal
    /// colors.
    pub fn lenient_hex(&mut self, lenient: bool) -> &mut Self {
        self.0.lenient_hex = lenient;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the initial color.
    pub fn color(&self) -> Color {
        self.0.color
    }

    /// Get the initial display mode.
    pub fn mode(&self) -> ColorMode {
        self.0.mode
    }

    /// Determine whether hexadecimal output uses uppercase digits.
    pub fn uppercase_hex(&self) -> bool {
        self.0.uppercase_hex
    }

    /// Determine whether color strings may omit the leading `#` of
    /// hexadecimal colors.
    pub fn lenient_hex(&self) -> bool {
        self.0.lenient_hex
    }
}
