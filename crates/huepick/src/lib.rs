//! # Huepick
//!
//! Huepick is the color model behind a color picker. It keeps one canonical
//! color in HSV with alpha and exposes it as hexadecimal string, as 24-bit
//! RGB channels, and as HSL coordinates, all kept consistent by construction.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Huepick's main abstractions are:
//!
//!   * [`Color`] is the **canonical color**, with hue in degrees and unit-range
//!     saturation, value, and alpha. [`Rgb`] and [`Hsl`] are its **derived
//!     representations**, computed on demand. [`Color`] also implements
//!     parsing and formatting of hexadecimal, `rgb()`, and `hsl()` strings as
//!     well as the choice of a [`ContrastColor`] for text on a swatch.
//!   * [`ColorState`] is the **mutable state** of one color picker. It
//!     combines a [`Color`] with the current [`ColorMode`] and offers getters
//!     and clamping setters for every representation. Its
//!     [`Options`](opt::Options) determine the initial color and mode as well
//!     as details of hex parsing and formatting.
//!   * The **harmony generator**, i.e., [`generate_color_harmony`] and
//!     [`generate_color_harmonies`], derives monochromatic, complementary,
//!     triadic, and analogous palettes from a base color. It is stateless.
//!   * The **conversion functions** [`hsv_to_rgb`], [`rgb_to_hsv`],
//!     [`hsv_to_hsl`], [`hsl_to_hsv`], [`rgb_to_hsl`], and [`hsl_to_rgb`]
//!     operate on plain arrays. [`normalize_hue`] wraps hues into `0..360`.
//!
//!
//! ## 2. Picking Colors
//!
//! ```
//! # use huepick::{ColorMode, ColorState, generate_color_harmony};
//! # use huepick::error::HarmonyError;
//! let mut state = ColorState::new();
//! assert!(state.set_color_from_string("#abcdef"));
//! assert_eq!(state.rgb_g(), 205);
//!
//! state.set_mode(ColorMode::Hsl);
//! assert_eq!(state.export_color(), "hsl(210, 68%, 80%)");
//!
//! let palette = generate_color_harmony(
//!     &state.export_color(), "complementary", ColorMode::Hex)?;
//! assert_eq!(palette.len(), 6);
//! # Ok::<(), HarmonyError>(())
//! ```
//!
//! Malformed color strings are no error for [`ColorState`]. Its setters
//! return `false` and leave the color unchanged instead. In contrast, an
//! unknown harmony scheme is an error, i.e.,
//! [`HarmonyError::InvalidScheme`](error::HarmonyError::InvalidScheme).
//!
//!
//! ## 3. Optional Features
//!
//! Huepick supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization and deserialization for colors,
//!     modes, schemes, and harmonies. This feature is disabled by default.
//!   - **`pyffi`** controls huepick's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Huepick logs through [tracing](https://docs.rs/tracing). Rejected inputs
//! are logged at debug level and mode changes at trace level. Without a
//! subscriber, logging costs next to nothing.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod harmony;
mod object;
pub mod opt;
mod state;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{
    hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsv,
    ColorMode, ContrastColor,
};
pub use harmony::{
    format_color, generate_color_harmonies, generate_color_harmony, parse_color_to_hsl,
    Harmonies, HarmonyScheme,
};
pub use object::{contrast_color, hex_to_rgb, parse_color_string, rgb_to_hex, Color, Hsl, Rgb};
pub use state::{ColorState, ColorUpdate};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // -------------------------------------------------------------------- functions
    m.add_function(wrap_pyfunction!(contrast_color, m)?)?;
    m.add_function(wrap_pyfunction!(format_color, m)?)?;
    m.add_function(wrap_pyfunction!(generate_color_harmonies, m)?)?;
    m.add_function(wrap_pyfunction!(generate_color_harmony, m)?)?;
    m.add_function(wrap_pyfunction!(parse_color_to_hsl, m)?)?;

    // ---------------------------------------------------------------------- classes
    m.add_class::<Color>()?;
    m.add_class::<ColorMode>()?;
    m.add_class::<ColorState>()?;
    m.add_class::<ContrastColor>()?;
    m.add_class::<Harmonies>()?;
    m.add_class::<HarmonyScheme>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Rgb>()?;

    Ok(())
}
