//! Packing and unpacking of "compound" RGB integers: a single integer holding red in its lowest
//! byte, green in the next one up, and blue in the one above that. Anything from the fourth byte
//! up (usually alpha, when there is one) is ignored.

use crate::color::Color;

/// Splits a compound RGB integer into its red, green, and blue bytes, in that order. Any integer
/// type that fits in an `i64` works, signed or not: only the low 24 bits mean anything, and there
/// is no validation.
/// # Example
/// ```
/// # use rgbhsl::packing::decompose_compound_rgb;
/// assert_eq!(decompose_compound_rgb(0x00FF8000u32), (0x00, 0x80, 0xFF));
/// // the high byte is thrown away, even when it makes the number negative
/// assert_eq!(decompose_compound_rgb(-1i32), (255, 255, 255));
/// ```
pub fn decompose_compound_rgb<T: Into<i64>>(compound: T) -> (u8, u8, u8) {
    let value: i64 = compound.into();
    let red = (value & 0xFF) as u8;
    let green = ((value >> 8) & 0xFF) as u8;
    let blue = ((value >> 16) & 0xFF) as u8;
    (red, green, blue)
}

/// Packs the channels of a color into a compound RGB integer, the inverse of
/// [`decompose_compound_rgb`]. The high byte is always 0.
/// # Example
/// ```
/// # use rgbhsl::prelude::*;
/// # use rgbhsl::packing::pack_integer_rgb;
/// let color = Color::from_channels(0x12, 0x34, 0x56);
/// assert_eq!(pack_integer_rgb(&color), 0x563412);
/// ```
pub fn pack_integer_rgb(color: &Color) -> u32 {
    debug!("packing {} {} {}", color.red, color.green, color.blue);
    let mut packed = u32::from(color.red) & 0xFF;
    packed |= (u32::from(color.green) & 0xFF) << 8;
    packed |= (u32::from(color.blue) & 0xFF) << 16;
    packed
}

/// Takes the lowest byte of any integer, the same way packing wraps channel values that don't fit
/// in a byte.
pub(crate) fn low_byte<T: Into<i64>>(value: T) -> u8 {
    (value.into() & 0xFF) as u8
}
