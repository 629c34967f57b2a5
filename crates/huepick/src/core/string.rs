use super::conversion::to_channel;
use crate::error::ColorFormatError;
use crate::Float;

/// The result of parsing a color string, before conversion into the
/// canonical HSV representation.
///
/// Keeping HSL colors in HSL avoids a needless round trip for callers, such
/// as the harmony generator, that work in HSL anyway.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Parsed {
    /// 24-bit RGB channels and alpha.
    Rgb([u8; 3], Float),
    /// Hue in degrees, unit-range saturation and lightness, and alpha.
    Hsl([Float; 3], Float),
}

/// Parse the hexadecimal digits of a hex color, without leading `#`. This
/// function transparently handles single-digit channels and an optional
/// alpha channel.
pub(crate) fn parse_hex_digits(s: &str) -> Result<([u8; 3], Float), ColorFormatError> {
    let (width, count) = match s.len() {
        3 => (1, 3),
        6 => (2, 3),
        8 => (2, 4),
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let channel = |index: usize| -> Result<u8, ColorFormatError> {
        let t = s
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if width == 1 { 16 * n + n } else { n })
    };

    let rgb = [channel(0)?, channel(1)?, channel(2)?];
    let alpha = if count == 4 {
        channel(3)? as Float / 255.0
    } else {
        1.0
    };

    Ok((rgb, alpha))
}

/// Parse a color in hashed hexadecimal format.
fn parse_hashed(s: &str) -> Result<([u8; 3], Float), ColorFormatError> {
    let digits = s
        .strip_prefix('#')
        .ok_or(ColorFormatError::UnknownFormat)?;
    parse_hex_digits(digits)
}

// --------------------------------------------------------------------------------------------------------------------

/// Split the arguments of a functional color format such as `rgb(1, 2, 3)`
/// into its three or four comma-separated arguments. The function name must
/// already have been stripped.
fn split_arguments(rest: &str) -> Result<Vec<&str>, ColorFormatError> {
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.trim_end()
                .strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let arguments: Vec<&str> = body.split(',').map(str::trim).collect();
    if arguments.iter().any(|a| a.is_empty()) || arguments.len() < 3 {
        return Err(ColorFormatError::MissingCoordinate);
    } else if 4 < arguments.len() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok(arguments)
}

/// Determine whether the string is a plain decimal literal, i.e., an optional
/// sign followed by digits with an optional fraction. Exponents, `inf`, and
/// `nan` do not qualify.
fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (integral, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    !(integral.is_empty() && fraction.is_empty())
        && integral.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a decimal number within the given inclusive bounds. Negative zero
/// becomes zero.
fn parse_bounded(s: &str, min: Float, max: Float) -> Result<Float, ColorFormatError> {
    if !is_decimal(s) {
        return Err(ColorFormatError::MalformedNumber);
    }

    let n: Float = s.parse().map_err(|_| ColorFormatError::MalformedNumber)?;
    if n < min || max < n {
        return Err(ColorFormatError::OutOfRange);
    }
    Ok(n + 0.0)
}

/// Parse the optional alpha argument, which defaults to 1.
fn parse_alpha(s: Option<&&str>) -> Result<Float, ColorFormatError> {
    s.map_or(Ok(1.0), |a| parse_bounded(a, 0.0, 1.0))
}

/// Parse the arguments of an `rgb()` or `rgba()` color. Channels must be
/// integers `0..=255`, alpha `0..=1`.
fn parse_rgb(rest: &str) -> Result<([u8; 3], Float), ColorFormatError> {
    let arguments = split_arguments(rest)?;

    let channel = |s: &str| -> Result<u8, ColorFormatError> {
        let n: i64 = s.parse().map_err(|_| ColorFormatError::MalformedNumber)?;
        u8::try_from(n).map_err(|_| ColorFormatError::OutOfRange)
    };

    let rgb = [
        channel(arguments[0])?,
        channel(arguments[1])?,
        channel(arguments[2])?,
    ];
    Ok((rgb, parse_alpha(arguments.get(3))?))
}

/// Parse the arguments of an `hsl()` or `hsla()` color. The hue must be
/// `0..=360`, saturation and lightness are percentages `0..=100` with
/// optional `%` sign, and alpha must be `0..=1`.
fn parse_hsl(rest: &str) -> Result<([Float; 3], Float), ColorFormatError> {
    let arguments = split_arguments(rest)?;

    let percent = |s: &str| -> Result<Float, ColorFormatError> {
        let s = s.strip_suffix('%').unwrap_or(s).trim_end();
        Ok(parse_bounded(s, 0.0, 100.0)? / 100.0)
    };

    let hsl = [
        parse_bounded(arguments[0], 0.0, 360.0)?,
        percent(arguments[1])?,
        percent(arguments[2])?,
    ];
    Ok((hsl, parse_alpha(arguments.get(3))?))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal colors with three, six, or
/// eight digits as well as the functional `rgb()`, `rgba()`, `hsl()`, and
/// `hsla()` formats with comma-separated arguments. When `lenient` is set, it
/// also accepts hexadecimal colors without the leading `#`. Before parsing,
/// this function trims leading and trailing white space and converts ASCII
/// letters to lowercase.
pub(crate) fn parse(s: &str, lenient: bool) -> Result<Parsed, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let (rgb, alpha) = parse_hashed(s)?;
        Ok(Parsed::Rgb(rgb, alpha))
    } else if let Some(rest) = s.strip_prefix("rgba").or_else(|| s.strip_prefix("rgb")) {
        let (rgb, alpha) = parse_rgb(rest)?;
        Ok(Parsed::Rgb(rgb, alpha))
    } else if let Some(rest) = s.strip_prefix("hsla").or_else(|| s.strip_prefix("hsl")) {
        let (hsl, alpha) = parse_hsl(rest)?;
        Ok(Parsed::Hsl(hsl, alpha))
    } else if lenient && !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        let (rgb, alpha) = parse_hex_digits(s)?;
        Ok(Parsed::Rgb(rgb, alpha))
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 24-bit color in hashed hexadecimal notation. The alpha channel
/// is included as fourth pair of digits only if it is smaller than 1.
pub(crate) fn format_hex(rgb: &[u8; 3], alpha: Float, uppercase: bool) -> String {
    let [r, g, b] = *rgb;
    let mut s = if uppercase {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    };

    if alpha < 1.0 {
        let a = to_channel(alpha);
        if uppercase {
            s.push_str(&format!("{:02X}", a));
        } else {
            s.push_str(&format!("{:02x}", a));
        }
    }
    s
}

/// Format the number with two fractional digits. Exact ties round away from
/// zero instead of to even.
pub(crate) fn to_fixed2(value: Float) -> String {
    // Binary fractions end in ...5 at the third decimal only for odd eighths.
    let eighths = value * 8.0;
    let value = if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        (value.abs() * 100.0).ceil().copysign(value) / 100.0
    } else {
        value
    };
    format!("{:.2}", value + 0.0)
}

/// Format the 24-bit color as `rgb(r, g, b)`, or as `rgba(r, g, b, a)` with
/// two fractional digits for alpha smaller than 1.
pub(crate) fn format_rgb(rgb: &[u8; 3], alpha: Float) -> String {
    let [r, g, b] = *rgb;
    if alpha < 1.0 {
        format!("rgba({}, {}, {}, {})", r, g, b, to_fixed2(alpha))
    } else {
        format!("rgb({}, {}, {})", r, g, b)
    }
}

/// Format the HSL coordinates as `hsl(h, s%, l%)`, or as `hsla(h, s%, l%, a)`
/// with two fractional digits for alpha smaller than 1. Hue and percentages
/// are rounded to integers.
pub(crate) fn format_hsl(hsl: &[Float; 3], alpha: Float) -> String {
    let [h, s, l] = *hsl;
    // Adding zero turns negative zero into zero.
    let (h, s, l) = (
        h.round() + 0.0,
        (s * 100.0).round() + 0.0,
        (l * 100.0).round() + 0.0,
    );
    if alpha < 1.0 {
        format!("hsla({}, {}%, {}%, {})", h, s, l, to_fixed2(alpha))
    } else {
        format!("hsl({}, {}%, {}%)", h, s, l)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        format_hex, format_hsl, format_rgb, parse, parse_bounded, parse_hashed, parse_hsl,
        parse_rgb, to_fixed2, Parsed,
    };
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, ([0x11_u8, 0x22, 0x33], 1.0));
        assert_eq!(parse_hashed("#112233")?, ([0x11_u8, 0x22, 0x33], 1.0));
        assert_eq!(parse_hashed("#ff000000")?, ([0xff_u8, 0, 0], 0.0));
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#ff00000"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#zzz"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+f0"), Err(ColorFormatError::MalformedHex));

        let (_, alpha) = parse_hashed("#ff000080")?;
        assert!((alpha - 0.5).abs() <= 0.01);

        Ok(())
    }

    #[test]
    fn test_parse_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(parse_rgb("(255, 128, 0)")?, ([255_u8, 128, 0], 1.0));
        assert_eq!(parse_rgb(" ( 1,2 ,3 , 0.3 ) ")?, ([1_u8, 2, 3], 0.3));
        assert_eq!(
            parse_rgb("255, 0, 0)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_rgb("(255, 0, 0"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_rgb("(255, 0)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_rgb("(255, , 0)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_rgb("(1, 2, 3, 0.5, 6)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(
            parse_rgb("(256, 0, 0)"),
            Err(ColorFormatError::OutOfRange)
        );
        assert_eq!(parse_rgb("(-1, 0, 0)"), Err(ColorFormatError::OutOfRange));
        assert_eq!(
            parse_rgb("(1.5, 0, 0)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            parse_rgb("(1, 0, 0, 1.5)"),
            Err(ColorFormatError::OutOfRange)
        );
        assert_eq!(
            parse_rgb("(1, 0, 0, nan)"),
            Err(ColorFormatError::MalformedNumber)
        );
        Ok(())
    }

    #[test]
    fn test_parse_hsl() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hsl("(240, 100%, 50%)")?, ([240.0, 1.0, 0.5], 1.0));
        assert_eq!(parse_hsl("(120, 50, 25, 0.2)")?, ([120.0, 0.5, 0.25], 0.2));
        assert_eq!(
            parse_hsl("(361, 100%, 50%)"),
            Err(ColorFormatError::OutOfRange)
        );
        assert_eq!(
            parse_hsl("(0, 101%, 50%)"),
            Err(ColorFormatError::OutOfRange)
        );
        assert_eq!(
            parse_hsl("(0, abc%, 50%)"),
            Err(ColorFormatError::MalformedNumber)
        );

        let ([h, _, _], _) = parse_hsl("(-0, 100%, 50%)")?;
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
        Ok(())
    }

    #[test]
    fn test_parse_bounded() -> Result<(), ColorFormatError> {
        assert_eq!(parse_bounded("12", 0.0, 100.0)?, 12.0);
        assert_eq!(parse_bounded("12.5", 0.0, 100.0)?, 12.5);
        assert_eq!(parse_bounded(".5", 0.0, 1.0)?, 0.5);
        assert_eq!(parse_bounded("1.", 0.0, 1.0)?, 1.0);
        assert!(parse_bounded("-0", 0.0, 1.0)?.is_sign_positive());

        for malformed in ["1e2", "1E2", ".", "", "inf", "NaN", "0x10", "1.2.3", "--1"] {
            assert_eq!(
                parse_bounded(malformed, 0.0, 360.0),
                Err(ColorFormatError::MalformedNumber),
                "{:?} should be malformed",
                malformed
            );
        }
        assert_eq!(
            parse_hsl("(1e2, 50%, 50%)"),
            Err(ColorFormatError::MalformedNumber)
        );
        assert_eq!(
            parse_bounded("-1", 0.0, 360.0),
            Err(ColorFormatError::OutOfRange)
        );
        Ok(())
    }

    #[test]
    fn test_to_fixed2() {
        assert_eq!(to_fixed2(0.125), "0.13");
        assert_eq!(to_fixed2(0.375), "0.38");
        assert_eq!(to_fixed2(0.625), "0.63");
        assert_eq!(to_fixed2(0.875), "0.88");
        assert_eq!(to_fixed2(0.015), "0.01");
        assert_eq!(to_fixed2(0.5), "0.50");
        assert_eq!(to_fixed2(0.0), "0.00");
        assert_eq!(to_fixed2(-0.0), "0.00");
        assert_eq!(to_fixed2(-0.125), "-0.13");

        assert_eq!(format_rgb(&[255, 0, 0], 0.125), "rgba(255, 0, 0, 0.13)");
        assert_eq!(format_hsl(&[0.0, 1.0, 0.5], 0.625), "hsla(0, 100%, 50%, 0.63)");
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("  #0F0 ", false)?, Parsed::Rgb([0, 255, 0], 1.0));
        assert_eq!(
            parse("RGBA(255, 0, 0, 0.5)", false)?,
            Parsed::Rgb([255, 0, 0], 0.5)
        );
        assert_eq!(
            parse("hsla(120, 50%, 50%, 0.2)", false)?,
            Parsed::Hsl([120.0, 0.5, 0.5], 0.2)
        );
        assert_eq!(parse("00ff00", true)?, Parsed::Rgb([0, 255, 0], 1.0));
        assert_eq!(parse("00ff00", false), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse("not-a-color", true),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(parse("", true), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse("rgbx(1, 2, 3)", true),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(format_hex(&[255, 0, 0], 1.0, false), "#ff0000");
        assert_eq!(format_hex(&[171, 205, 239], 1.0, true), "#ABCDEF");
        assert_eq!(format_hex(&[255, 0, 0], 0.5, false), "#ff000080");
        assert_eq!(format_rgb(&[255, 0, 0], 1.0), "rgb(255, 0, 0)");
        assert_eq!(format_rgb(&[255, 0, 0], 0.5), "rgba(255, 0, 0, 0.50)");
        assert_eq!(format_hsl(&[0.0, 1.0, 0.5], 1.0), "hsl(0, 100%, 50%)");
        assert_eq!(format_hsl(&[-0.0, 1.0, 0.5], 1.0), "hsl(0, 100%, 50%)");
        assert_eq!(format_hsl(&[-0.2, 0.0, 0.0], 1.0), "hsl(0, 0%, 0%)");
        assert_eq!(
            format_hsl(&[210.0, 0.68, 0.803921568627451], 0.3),
            "hsla(210, 68%, 80%, 0.30)"
        );
    }
}
