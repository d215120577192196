//! This file implements HSL, a simple transformation of RGB into a cylinder: hue is the angle around
//! it, saturation the distance from the gray axis, and luminosity (or lightness) the height, running
//! from black at the bottom through fully saturated colors in the middle to white at the top. It's
//! not perceptually uniform in the slightest, but it is what people type into color pickers.
//!
//! Everything here is normalized: hue is the fraction of a full turn rather than degrees, and
//! saturation and luminosity run from 0 to 1. The unit handling lives in
//! [`options`](../options/index.html).
//!
//! A note on the shape of the space: this implementation is hexagonal, not circular. Colors are
//! placed on a hexagon (one side per 60 degrees of hue) and that hexagon is stretched into a circle.
//! This is the usual definition and matches what browsers do.

use float_cmp::approx_eq;

use crate::bound::Bound;
use crate::color::Color;
use crate::error::Component;

/// A color as normalized hue, saturation, and luminosity. Unlike [`Color`], nothing guarantees
/// these are in range: see [`Bound`] for checking and clamping.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue, as a fraction of a full turn: 0 is red, 1/3 green, 2/3 blue, and 1 is red again.
    pub hue: f64,
    /// The saturation, from 0 (gray) to 1.
    pub sat: f64,
    /// The luminosity, from 0 (black) through 0.5 (fully saturated) to 1 (white).
    pub lum: f64,
}

impl Hsl {
    /// Builds a new triple. No checking is done.
    pub fn new(hue: f64, sat: f64, lum: f64) -> Hsl {
        Hsl { hue, sat, lum }
    }

    /// Whether two triples are equal up to a small tolerance in each component. Hue is compared
    /// around the circle, so 0 and 1 count as equal.
    /// # Example
    /// ```
    /// # use rgbhsl::prelude::*;
    /// let red = Hsl::new(0., 1., 0.5);
    /// assert!(red.approx_equal(&Hsl::new(1.0 - 1e-12, 1., 0.5)));
    /// assert!(!red.approx_equal(&Hsl::new(0.5, 1., 0.5)));
    /// ```
    pub fn approx_equal(&self, other: &Hsl) -> bool {
        let hue_diff = (self.hue - other.hue).rem_euclid(1.0);
        let hue_close = approx_eq!(f64, hue_diff, 0.0, epsilon = 1e-9)
            || approx_eq!(f64, hue_diff, 1.0, epsilon = 1e-9);
        hue_close
            && approx_eq!(f64, self.sat, other.sat, epsilon = 1e-9)
            && approx_eq!(f64, self.lum, other.lum, epsilon = 1e-9)
    }

    /// Logs a warning for every component outside of 0 to 1. Nothing is changed.
    pub(crate) fn warn_if_out_of_range(&self) {
        for (component, value) in self.out_of_bounds() {
            warn!("{:?} value {} is not normalized", component, value);
        }
    }
}

impl Bound for Hsl {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }

    fn labels() -> [Component; 3] {
        [Component::Hue, Component::Saturation, Component::Luminosity]
    }

    fn components(&self) -> [f64; 3] {
        [self.hue, self.sat, self.lum]
    }

    fn from_components(components: [f64; 3]) -> Hsl {
        Hsl {
            hue: components[0],
            sat: components[1],
            lum: components[2],
        }
    }
}

/// Converts a normalized HSL triple to RGB bytes. This is the standard chroma-based algorithm.
///
/// The hue circle is split into six half-open segments, [0, 1), [1, 2), ... [5, 6) in sixths of a
/// turn, so a hue sitting exactly on an edge belongs to the segment that starts there. Hue wraps
/// around: 1 is the same as 0, and so is 2 or -1. Each channel is rounded to the nearest integer,
/// halves away from zero, and clamped to 0-255, so out-of-range saturation or luminosity still
/// produces a valid (if meaningless) color. A NaN hue falls in no segment, leaving only the
/// lightness offset; NaN anywhere else gives 0 in the affected channels.
pub(crate) fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    // chroma is the distance between the largest and smallest channel: it peaks at half lightness
    // and falls to nothing at black and white
    let chroma = (1.0 - (2.0 * hsl.lum - 1.0).abs()) * hsl.sat;
    let mut hue_prime = (hsl.hue * 6.0).rem_euclid(6.0);
    if hue_prime == 6.0 {
        // rem_euclid rounds tiny negative hues up to the divisor
        hue_prime = 0.0;
    }
    // the second-largest channel, before the lightness offset: call this x
    let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if hue_prime < 1.0 {
        (chroma, x, 0.0)
    } else if hue_prime < 2.0 {
        (x, chroma, 0.0)
    } else if hue_prime < 3.0 {
        (0.0, chroma, x)
    } else if hue_prime < 4.0 {
        (0.0, x, chroma)
    } else if hue_prime < 5.0 {
        (x, 0.0, chroma)
    } else if hue_prime < 6.0 {
        (chroma, 0.0, x)
    } else {
        // only NaN gets here
        (0.0, 0.0, 0.0)
    };

    // now shift everything up so the lightness is right
    let offset = hsl.lum - chroma / 2.0;
    (
        to_byte(r1 + offset),
        to_byte(g1 + offset),
        to_byte(b1 + offset),
    )
}

/// Scales a 0-1 channel to 0-255, rounding halves away from zero. NaN becomes 0.
pub(crate) fn to_byte(channel: f64) -> u8 {
    num::clamp((channel * 255.0).round(), 0.0, 255.0) as u8
}

impl From<Color> for Hsl {
    /// Derives HSL from RGB. Gray has a hue of 0, although any hue would do, and black and white
    /// have a saturation of 0.
    fn from(color: Color) -> Hsl {
        let r = f64::from(color.red) / 255.0;
        let g = f64::from(color.green) / 255.0;
        let b = f64::from(color.blue) / 255.0;

        // project the RGB cube onto a hexagon: the "radius" is just the largest component minus
        // the smallest
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        // hue, in sixths of a turn, by which side of the hexagon we're on
        let hue_prime = if chroma == 0.0 {
            0.0
        } else if max_c == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max_c == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        let lum = (max_c + min_c) / 2.0;
        let sat = if lum == 0.0 || lum == 1.0 {
            // would divide by 0 otherwise
            0.0
        } else {
            // float error can push fully saturated colors a hair past 1
            num::clamp(chroma / (1.0 - (2.0 * lum - 1.0).abs()), 0.0, 1.0)
        };

        Hsl {
            hue: hue_prime / 6.0,
            sat,
            lum,
        }
    }
}

impl From<Hsl> for Color {
    /// Converts without any checks: out-of-range values are handled the way
    /// [`Color::from_hsl_normalized`] describes, minus the warning.
    fn from(hsl: Hsl) -> Color {
        let (red, green, blue) = hsl_to_rgb(hsl);
        Color::from_channels(red, green, blue)
    }
}
