//! Options describing how raw numbers become a normalized HSL triple: what unit the hue is in, how
//! saturation and luminosity are scaled, whether the inputs are truncated to whole numbers first,
//! and what happens when something ends up outside of 0 to 1 anyway.
//!
//! The three presets, [`ConversionOptions::normalized`], [`ConversionOptions::standard`] and
//! [`ConversionOptions::radians`], are exactly what the matching
//! [`Color`](../color/struct.Color.html) constructors use. Note that they differ in more than
//! units: only the standard preset truncates.
//!
//! Options are plain data and implement `Serialize` and `Deserialize`, with every missing field
//! taking its default, so they can live in whatever configuration file an application already has.

use std::f64::consts::PI;

use crate::bound::Bound;
use crate::error::ConversionError;
use crate::hsl::Hsl;

/// The unit a hue is given in.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum HueUnit {
    /// A fraction of a full turn, from 0 to 1.
    Normalized,
    /// Degrees, from 0 to 360.
    Degrees,
    /// Radians, from 0 to 2π.
    Radians,
}

impl HueUnit {
    /// The value of a full turn in this unit.
    pub fn full_turn(self) -> f64 {
        match self {
            HueUnit::Normalized => 1.0,
            HueUnit::Degrees => 360.0,
            HueUnit::Radians => 2.0 * PI,
        }
    }
}

impl Default for HueUnit {
    fn default() -> HueUnit {
        HueUnit::Normalized
    }
}

/// How saturation and luminosity are scaled.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentScale {
    /// From 0 to 1.
    Normalized,
    /// Percentages, from 0 to 100.
    Percent,
}

impl ComponentScale {
    /// The value of a full component in this scale.
    pub fn full_scale(self) -> f64 {
        match self {
            ComponentScale::Normalized => 1.0,
            ComponentScale::Percent => 100.0,
        }
    }
}

impl Default for ComponentScale {
    fn default() -> ComponentScale {
        ComponentScale::Normalized
    }
}

/// What to do with a component that is outside of 0 to 1 after normalization.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePolicy {
    /// Log a warning and convert the value anyway. The result is deterministic but not
    /// meaningful; see [`Color::from_hsl_normalized`](../color/struct.Color.html#method.from_hsl_normalized).
    PassThrough,
    /// Wrap the hue around the circle and clamp saturation and luminosity into range.
    Clamp,
    /// Fail with [`ConversionError::OutOfRange`] on the first offending component.
    Reject,
}

impl Default for RangePolicy {
    fn default() -> RangePolicy {
        RangePolicy::PassThrough
    }
}

/// The unit RGB channels are given in, for
/// [`Color::from_rgb_with`](../color/struct.Color.html#method.from_rgb_with).
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelUnit {
    /// Bytes, from 0 to 255.
    Byte,
    /// Fractions, from 0 to 1.
    Fraction,
    /// Radians. There is no sensible meaning for an RGB channel as an angle, so this is always
    /// rejected with [`ConversionError::Unsupported`].
    Radians,
}

/// Everything that decides how three raw numbers become a normalized HSL triple.
/// # Example
/// Percentages for saturation and luminosity, but a normalized hue, rejecting anything out of range:
///
/// ```
/// # use rgbhsl::prelude::*;
/// let options = ConversionOptions {
///     component_scale: ComponentScale::Percent,
///     range_policy: RangePolicy::Reject,
///     ..ConversionOptions::default()
/// };
/// let teal = Color::from_hsl_with(0.5, 50., 50., &options).unwrap();
/// assert_eq!(teal.to_string(), "#40BFBF");
/// assert!(Color::from_hsl_with(0.5, 150., 50., &options).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// The unit of the hue.
    pub hue_unit: HueUnit,
    /// The scale of saturation and luminosity.
    pub component_scale: ComponentScale,
    /// Whether to truncate each input toward zero before dividing by its scale. With degrees and
    /// percentages, this throws away any fractional part of the input.
    pub truncate: bool,
    /// What to do with values that end up outside of 0 to 1.
    pub range_policy: RangePolicy,
}

impl Default for ConversionOptions {
    fn default() -> ConversionOptions {
        ConversionOptions::normalized()
    }
}

impl ConversionOptions {
    /// Everything already normalized to 0 to 1, no truncation, out-of-range values passed through.
    pub fn normalized() -> ConversionOptions {
        ConversionOptions {
            hue_unit: HueUnit::Normalized,
            component_scale: ComponentScale::Normalized,
            truncate: false,
            range_policy: RangePolicy::PassThrough,
        }
    }

    /// Hue in degrees, saturation and luminosity in percent, each truncated to a whole number
    /// first.
    pub fn standard() -> ConversionOptions {
        ConversionOptions {
            hue_unit: HueUnit::Degrees,
            component_scale: ComponentScale::Percent,
            truncate: true,
            range_policy: RangePolicy::PassThrough,
        }
    }

    /// Hue in radians, saturation and luminosity in percent, with no truncation.
    pub fn radians() -> ConversionOptions {
        ConversionOptions {
            hue_unit: HueUnit::Radians,
            component_scale: ComponentScale::Percent,
            truncate: false,
            range_policy: RangePolicy::PassThrough,
        }
    }

    /// The same options with a different range policy.
    pub fn with_range_policy(self, range_policy: RangePolicy) -> ConversionOptions {
        ConversionOptions {
            range_policy,
            ..self
        }
    }

    /// Scales the inputs into a normalized triple, truncating first if asked to. No range checks
    /// are done here.
    pub fn normalize(&self, hue: f64, sat: f64, lum: f64) -> Hsl {
        let prepare = |x: f64| if self.truncate { x.trunc() } else { x };
        let full = self.component_scale.full_scale();
        Hsl {
            hue: prepare(hue) / self.hue_unit.full_turn(),
            sat: prepare(sat) / full,
            lum: prepare(lum) / full,
        }
    }

    /// Normalizes the inputs and then applies the range policy.
    /// # Errors
    /// Returns [`ConversionError::OutOfRange`] for the first component outside of 0 to 1 (NaN
    /// included) when the policy is [`RangePolicy::Reject`]. The other policies never fail.
    pub fn resolve(&self, hue: f64, sat: f64, lum: f64) -> Result<Hsl, ConversionError> {
        let hsl = self.normalize(hue, sat, lum);
        match self.range_policy {
            RangePolicy::PassThrough => {
                hsl.warn_if_out_of_range();
                Ok(hsl)
            }
            RangePolicy::Clamp => {
                let wrapped = Hsl {
                    hue: hsl.hue.rem_euclid(1.0),
                    ..hsl
                };
                let clamped = wrapped.clamp();
                if clamped != hsl {
                    debug!("clamped {:?} to {:?}", hsl, clamped);
                }
                Ok(clamped)
            }
            RangePolicy::Reject => match hsl.out_of_bounds().first() {
                Some(&(component, value)) => Err(ConversionError::OutOfRange { component, value }),
                None => Ok(hsl),
            },
        }
    }
}
