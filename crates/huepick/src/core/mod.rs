mod contrast;
mod conversion;
mod equality;
mod mode;
mod string;

// contrast
pub use contrast::ContrastColor;
pub(crate) use contrast::to_contrast_color;

// conversion
pub use conversion::{
    hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsv,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_components;

// mode
pub use mode::ColorMode;

// string
pub(crate) use string::{format_hex, format_hsl, format_rgb, parse, parse_hex_digits, Parsed};
