//! This file defines [`Color`], the one value every conversion in this crate produces, along with
//! all of the ways to build one.
//!
//! A `Color` stores red, green, and blue bytes and nothing else. Hue, saturation, and luminosity are
//! derived from those bytes whenever they're asked for, which means a color built from RGB has
//! exactly the same HSL as one built from HSL that rounds to the same bytes.

use std::fmt;
use std::str::FromStr;

use crate::csscolor::parse_color_str;
use crate::error::{ConversionError, ParseError};
use crate::hsl::{to_byte, Hsl};
use crate::options::{ChannelUnit, ConversionOptions};
use crate::packing::{decompose_compound_rgb, low_byte, pack_integer_rgb};

/// A color, stored as 8-bit red, green, and blue channels. Every value of this type is valid.
/// # Example
/// The same purple, four ways.
///
/// ```
/// # use rgbhsl::prelude::*;
/// let from_rgb = Color::from_channels(128, 0, 255);
/// let from_int = Color::from_compound(0xFF0080u32);
/// let from_hsl = Color::from_hsl_standard(270., 100., 50.);
/// let from_str: Color = "hsl(270, 100%, 50%)".parse().unwrap();
/// assert_eq!(from_rgb, from_int);
/// assert_eq!(from_rgb, from_hsl);
/// assert_eq!(from_rgb, from_str);
/// assert!((from_rgb.hue() - 0.75).abs() <= 0.01);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// The red channel, from 0 to 255.
    pub red: u8,
    /// The green channel, from 0 to 255.
    pub green: u8,
    /// The blue channel, from 0 to 255.
    pub blue: u8,
}

impl Color {
    /// Builds a color directly from its channels.
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Builds a color from channels that may not fit in a byte, keeping only the lowest byte of
    /// each. This is the same wrapping that [`to_compound`](Color::to_compound) has always done to
    /// oversized channels.
    /// # Example
    /// ```
    /// # use rgbhsl::prelude::*;
    /// assert_eq!(Color::from_channels_wrapping(256, -1, 300), Color::from_channels(0, 255, 44));
    /// ```
    pub fn from_channels_wrapping<T: Into<i64>>(red: T, green: T, blue: T) -> Color {
        Color {
            red: low_byte(red),
            green: low_byte(green),
            blue: low_byte(blue),
        }
    }

    /// Builds a color from a compound integer, with red in the lowest byte. See
    /// [`decompose_compound_rgb`](../packing/fn.decompose_compound_rgb.html).
    pub fn from_compound<T: Into<i64>>(compound: T) -> Color {
        let (red, green, blue) = decompose_compound_rgb(compound);
        Color::from_channels(red, green, blue)
    }

    /// Packs this color into a compound integer, with red in the lowest byte. See
    /// [`pack_integer_rgb`](../packing/fn.pack_integer_rgb.html).
    pub fn to_compound(&self) -> u32 {
        pack_integer_rgb(self)
    }

    /// Builds a color from floating-point channels in the given unit. Values are rounded to the
    /// nearest byte, halves away from zero, and clamped to 0-255.
    /// # Errors
    /// [`ChannelUnit::Radians`] has no meaning for RGB and always gives
    /// [`ConversionError::Unsupported`].
    /// # Example
    /// ```
    /// # use rgbhsl::prelude::*;
    /// let gray = Color::from_rgb_with(0.5, 0.5, 0.5, ChannelUnit::Fraction).unwrap();
    /// assert_eq!(gray, Color::from_channels(128, 128, 128));
    /// assert!(Color::from_rgb_with(1., 2., 3., ChannelUnit::Radians).is_err());
    /// ```
    pub fn from_rgb_with(
        red: f64,
        green: f64,
        blue: f64,
        unit: ChannelUnit,
    ) -> Result<Color, ConversionError> {
        let convert: fn(f64) -> u8 = match unit {
            ChannelUnit::Byte => |x: f64| num::clamp(x.round(), 0.0, 255.0) as u8,
            ChannelUnit::Fraction => to_byte,
            ChannelUnit::Radians => {
                error!("RGB channels cannot be given in radians");
                return Err(ConversionError::Unsupported("RGB channels in radians"));
            }
        };
        Ok(Color {
            red: convert(red),
            green: convert(green),
            blue: convert(blue),
        })
    }

    /// Builds a color from hue, saturation, and luminosity, each from 0 to 1. Hue is a fraction of
    /// the full turn, so 0.5 is cyan.
    ///
    /// Values outside of 0 to 1 are logged as warnings and then converted anyway: the hue wraps
    /// around the circle, and channels that overshoot are clamped to 0-255. The result is
    /// deterministic, but don't expect it to mean much. Use
    /// [`from_hsl_with`](Color::from_hsl_with) to clamp or reject instead.
    /// # Example
    /// ```
    /// # use rgbhsl::prelude::*;
    /// let cyan = Color::from_hsl_normalized(0.5, 0.5, 0.5);
    /// assert_eq!(cyan, Color::from_channels(64, 191, 191));
    /// ```
    pub fn from_hsl_normalized(hue: f64, sat: f64, lum: f64) -> Color {
        Color::from_hsl_lenient(hue, sat, lum, ConversionOptions::normalized())
    }

    /// Builds a color from hue in degrees (0 to 360) and saturation and luminosity as percentages
    /// (0 to 100). Each input is truncated to a whole number first, so 270.9 degrees is 270
    /// degrees. Out-of-range values are treated as [`from_hsl_normalized`](Color::from_hsl_normalized)
    /// describes.
    /// # Example
    /// ```
    /// # use rgbhsl::prelude::*;
    /// assert_eq!(Color::from_hsl_standard(120., 100., 20.), Color::from_channels(0, 102, 0));
    /// assert_eq!(Color::from_hsl_standard(360., 50., 50.), Color::from_hsl_standard(0., 50., 50.));
    /// ```
    pub fn from_hsl_standard(hue: f64, sat: f64, lum: f64) -> Color {
        Color::from_hsl_lenient(hue, sat, lum, ConversionOptions::standard())
    }

    /// Builds a color from hue in radians (0 to 2π) and saturation and luminosity as percentages
    /// (0 to 100). Unlike [`from_hsl_standard`](Color::from_hsl_standard), nothing is truncated.
    pub fn from_hsl_radians(hue: f64, sat: f64, lum: f64) -> Color {
        Color::from_hsl_lenient(hue, sat, lum, ConversionOptions::radians())
    }

    /// Builds a color from hue, saturation, and luminosity, interpreted according to `options`.
    /// # Errors
    /// Gives [`ConversionError::OutOfRange`] if a component is out of range and the options say to
    /// reject it. See [`ConversionOptions::resolve`].
    pub fn from_hsl_with(
        hue: f64,
        sat: f64,
        lum: f64,
        options: &ConversionOptions,
    ) -> Result<Color, ConversionError> {
        options.resolve(hue, sat, lum).map(Color::from)
    }

    // the presets all pass values through, so there's no error to handle
    fn from_hsl_lenient(hue: f64, sat: f64, lum: f64, options: ConversionOptions) -> Color {
        let hsl = options.normalize(hue, sat, lum);
        hsl.warn_if_out_of_range();
        Color::from(hsl)
    }

    /// The HSL representation of this color, all components from 0 to 1.
    pub fn hsl(&self) -> Hsl {
        Hsl::from(*self)
    }

    /// The hue, as a fraction of a full turn. Gray colors have a hue of 0.
    pub fn hue(&self) -> f64 {
        self.hsl().hue
    }

    /// The saturation, from 0 to 1.
    pub fn sat(&self) -> f64 {
        self.hsl().sat
    }

    /// The luminosity, from 0 to 1.
    pub fn lum(&self) -> f64 {
        self.hsl().lum
    }
}

impl fmt::Display for Color {
    /// Writes the color as an uppercase hex code, like `#8000FF`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Parses a hex code (`#RGB` or `#RRGGBB`), CSS functional notation (`rgb(128, 0, 255)` or
    /// `hsl(270, 100%, 50%)`), or one of the sixteen basic CSS color keywords. Surrounding
    /// whitespace and letter case don't matter.
    fn from_str(s: &str) -> Result<Color, ParseError> {
        parse_color_str(s)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::options::RangePolicy;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_scenarios() {
        let cases = [
            ((270., 100., 50.), (128, 0, 255)),
            ((120., 100., 20.), (0, 102, 0)),
            ((0., 50., 50.), (191, 64, 64)),
            ((180., 50., 50.), (64, 191, 191)),
        ];
        for &((h, s, l), (r, g, b)) in cases.iter() {
            assert_eq!(Color::from_hsl_standard(h, s, l), Color::from_channels(r, g, b));
        }
        assert_eq!(
            Color::from_hsl_normalized(0. / 360., 0.1, 0.1),
            Color::from_channels(28, 23, 23)
        );
    }

    #[test]
    fn test_standard_truncates_but_radians_does_not() {
        // 0.9% saturation truncates to nothing
        assert_eq!(Color::from_hsl_standard(0., 0.9, 50.), Color::from_channels(128, 128, 128));
        assert_eq!(
            Color::from_hsl_standard(270.9, 100.7, 50.2),
            Color::from_hsl_standard(270., 100., 50.)
        );
        assert_ne!(Color::from_hsl_radians(0., 40.9, 50.), Color::from_hsl_radians(0., 40., 50.));
        assert_eq!(
            Color::from_hsl_radians(1.5 * PI, 100., 50.),
            Color::from_channels(128, 0, 255)
        );
    }

    #[test]
    fn test_presets_match_constructors() {
        let inputs = [(210., 40., 60.), (33.3, 12.5, 87.5), (359.9, 99.9, 0.1)];
        for &(h, s, l) in inputs.iter() {
            assert_eq!(
                Color::from_hsl_with(h, s, l, &ConversionOptions::standard()),
                Ok(Color::from_hsl_standard(h, s, l))
            );
            let radians = h / 180. * PI;
            assert_eq!(
                Color::from_hsl_with(radians, s, l, &ConversionOptions::radians()),
                Ok(Color::from_hsl_radians(radians, s, l))
            );
            assert_eq!(
                Color::from_hsl_with(h / 360., s / 100., l / 100., &ConversionOptions::default()),
                Ok(Color::from_hsl_normalized(h / 360., s / 100., l / 100.))
            );
        }
    }

    #[test]
    fn test_out_of_range_policies() {
        let clamp = ConversionOptions::normalized().with_range_policy(RangePolicy::Clamp);
        assert_eq!(
            Color::from_hsl_with(1.5, 2.0, 0.5, &clamp),
            Ok(Color::from_channels(0, 255, 255))
        );
        let reject = ConversionOptions::normalized().with_range_policy(RangePolicy::Reject);
        assert!(Color::from_hsl_with(0.5, 0.5, -0.1, &reject).is_err());
        // passing through still gives some color
        let _ = Color::from_hsl_normalized(-7.0, 12.0, 0.5);
    }

    #[test]
    fn test_rgb_origin_has_hsl() {
        let color = Color::from_channels(191, 64, 64);
        assert!(color.hue().abs() <= 1e-9);
        assert!((color.sat() - 0.498).abs() <= 0.001);
        assert!((color.lum() - 0.5).abs() <= 0.001);
        assert_eq!(Color::from(color.hsl()), color);
    }

    #[test]
    fn test_compound() {
        let color = Color::from_compound(0x40BFBFu32);
        assert_eq!(color, Color::from_channels(0xBF, 0xBF, 0x40));
        assert_eq!(color.to_compound(), 0x40BFBF);
        assert_eq!(Color::from_compound(-1i64), Color::from_channels(255, 255, 255));
    }

    #[test]
    fn test_rgb_units() {
        assert_eq!(
            Color::from_rgb_with(12.4, 300., -5., ChannelUnit::Byte),
            Ok(Color::from_channels(12, 255, 0))
        );
        assert_eq!(
            Color::from_rgb_with(1., 0.2, 0., ChannelUnit::Fraction),
            Ok(Color::from_channels(255, 51, 0))
        );
        assert_eq!(
            Color::from_rgb_with(0., 0., 0., ChannelUnit::Radians),
            Err(ConversionError::Unsupported("RGB channels in radians"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_channels(110, 102, 204).to_string(), "#6E66CC");
        assert_eq!(Color::from_channels(0, 0, 0).to_string(), "#000000");
    }
}
