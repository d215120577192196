//! This file uses the CSS numeric parsing in `cssnumeric.rs` to parse colors written the way CSS
//! writes them: hex codes, the `rgb()` and `hsl()` functions, and the sixteen basic color keywords.
//! Arithmetic, alpha and the newer space-separated syntax are not supported. It exists to implement
//! `FromStr` for [`Color`](../color/struct.Color.html). The full spec is here:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).

use std::collections::HashMap;

use regex::Regex;

use crate::color::Color;
use crate::cssnumeric::{parse_css_number, CSSNumeric};
use crate::error::ParseError;
use crate::hsl::to_byte;
use crate::options::{ComponentScale, ConversionOptions, HueUnit, RangePolicy};

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#([0-9a-f]{3}|[0-9a-f]{6})$").unwrap();
    static ref FUNCTION: Regex = Regex::new(r"^(rgb|hsl)\(([^()]*)\)$").unwrap();
    // the CSS level 1 keywords, red first
    static ref KEYWORDS: HashMap<&'static str, (u8, u8, u8)> = hashmap! {
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" => (0, 255, 255),
    };
}

/// Interprets a CSS numeric as an RGB channel: numbers are bytes, percentages are fractions of 255.
/// Both are clamped.
fn rgb_channel(value: CSSNumeric) -> u8 {
    match value {
        CSSNumeric::Number(val) => num::clamp(val.round(), 0., 255.) as u8,
        CSSNumeric::Percentage(val) => to_byte(val / 100.),
    }
}

/// Parses a hex code like "#a0f" or "#aa00ff", already lowercased. Note that hex codes list red
/// first, the opposite of compound integers.
fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    let digits = HEX_CODE
        .captures(hex)
        .ok_or(ParseError::InvalidColorSyntax)?[1]
        .to_string();
    let value = u32::from_str_radix(&digits, 16).map_err(|_| ParseError::InvalidColorSyntax)?;
    if digits.len() == 3 {
        // each digit is doubled: 0xa is 0xaa = 10 * 17
        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 17;
        Ok(Color::from_channels(nibble(8), nibble(4), nibble(0)))
    } else {
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;
        Ok(Color::from_channels(byte(16), byte(8), byte(0)))
    }
}

/// Parses the comma-separated arguments of a CSS color function into exactly three numerics.
fn parse_arguments(args: &str) -> Result<[CSSNumeric; 3], ParseError> {
    let nums = args
        .split(',')
        .map(|arg| parse_css_number(arg.trim()))
        .collect::<Result<Vec<CSSNumeric>, ParseError>>()?;
    match nums.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(ParseError::InvalidColorSyntax),
    }
}

/// Parses "hsl(h, s%, l%)" arguments. Hue is in degrees and may be fractional; saturation and
/// lightness must be percentages. Out-of-range values are clamped, as CSS does.
fn hsl_from_arguments(args: [CSSNumeric; 3]) -> Result<Color, ParseError> {
    let options = ConversionOptions {
        hue_unit: HueUnit::Degrees,
        component_scale: ComponentScale::Percent,
        truncate: false,
        range_policy: RangePolicy::Clamp,
    };
    match args {
        [CSSNumeric::Number(h), CSSNumeric::Percentage(s), CSSNumeric::Percentage(l)] => {
            Color::from_hsl_with(h, s, l, &options).map_err(|_| ParseError::InvalidColorSyntax)
        }
        _ => Err(ParseError::InvalidColorSyntax),
    }
}

/// Parses any supported color string: see the `FromStr` implementation on
/// [`Color`](../color/struct.Color.html).
pub(crate) fn parse_color_str(s: &str) -> Result<Color, ParseError> {
    let lowered = s.trim().to_lowercase();
    if lowered.starts_with('#') {
        return parse_hex(&lowered);
    }
    if let Some(caps) = FUNCTION.captures(&lowered) {
        let args = parse_arguments(&caps[2])?;
        return match &caps[1] {
            "rgb" => Ok(Color::from_channels(
                rgb_channel(args[0]),
                rgb_channel(args[1]),
                rgb_channel(args[2]),
            )),
            _ => hsl_from_arguments(args),
        };
    }
    if lowered.contains('(') || lowered.is_empty() {
        return Err(ParseError::InvalidColorSyntax);
    }
    match KEYWORDS.get(lowered.as_str()) {
        Some(&(red, green, blue)) => Ok(Color::from_channels(red, green, blue)),
        None => Err(ParseError::UnknownKeyword),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_channel_parsing() {
        assert_eq!(rgb_channel(CSSNumeric::Number(104.)), 104);
        assert_eq!(rgb_channel(CSSNumeric::Number(234923.)), 255);
        assert_eq!(rgb_channel(CSSNumeric::Number(34.5)), 35);
        assert_eq!(rgb_channel(CSSNumeric::Percentage(20.)), 51);
        assert_eq!(rgb_channel(CSSNumeric::Percentage(115.)), 255);
        assert_eq!(rgb_channel(CSSNumeric::Percentage(-3.)), 0);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_color_str("#8000FF"), Ok(Color::from_channels(128, 0, 255)));
        assert_eq!(parse_color_str("  #6e66cc "), Ok(Color::from_channels(110, 102, 204)));
        assert_eq!(parse_color_str("#a0f"), Ok(Color::from_channels(170, 0, 255)));
        assert_eq!(parse_color_str("#12345"), Err(ParseError::InvalidColorSyntax));
        assert_eq!(parse_color_str("#ggg"), Err(ParseError::InvalidColorSyntax));
    }

    #[test]
    fn test_rgb_str_parsing() {
        // test integers and percents all at once
        assert_eq!(parse_color_str("rgb(125, 20%, 0)"), Ok(Color::from_channels(125, 51, 0)));
        // test clamping in every direction
        assert_eq!(
            parse_color_str("RGB(-125, -20%, 300)"),
            Ok(Color::from_channels(0, 0, 255))
        );
        // test error on bad syntax
        assert_eq!(parse_color_str("rgb(123, 123, 41, 22)"), Err(ParseError::InvalidColorSyntax));
        assert_eq!(parse_color_str("rgb(())"), Err(ParseError::InvalidColorSyntax));
        assert_eq!(parse_color_str("rgb(1, 2, x)"), Err(ParseError::InvalidNumericCharacters));
    }

    #[test]
    fn test_hsl_str_parsing() {
        assert_eq!(
            parse_color_str("hsl(270, 100%, 50%)"),
            Ok(Color::from_hsl_standard(270., 100., 50.))
        );
        assert_eq!(
            parse_color_str("hsl(180,50%,50%)"),
            Ok(Color::from_channels(64, 191, 191))
        );
        // wraps the hue, clamps the rest
        assert_eq!(
            parse_color_str("hsl(-240, 120%, 50%)"),
            Ok(Color::from_channels(0, 255, 0))
        );
        // saturation and lightness have to be percentages
        assert_eq!(parse_color_str("hsl(270, 1, 0.5)"), Err(ParseError::InvalidColorSyntax));
        assert_eq!(parse_color_str("hsl(270%, 100%, 50%)"), Err(ParseError::InvalidColorSyntax));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_color_str("Teal"), Ok(Color::from_channels(0, 128, 128)));
        assert_eq!(parse_color_str("fuchsia"), Ok(Color::from_channels(255, 0, 255)));
        assert_eq!(parse_color_str("chartreuse"), Err(ParseError::UnknownKeyword));
        assert_eq!(parse_color_str(""), Err(ParseError::InvalidColorSyntax));
        assert_eq!(parse_color_str("hsv(1, 2%, 3%)"), Err(ParseError::InvalidColorSyntax));
    }
}
