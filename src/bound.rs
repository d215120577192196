//! This module describes the Bound trait, which says what range each component of a color
//! representation is meant to live in. For HSL, every component is normalized to run from 0 to 1,
//! but nothing stops a caller from handing in 1.5 or -0.2. The trait gives two ways of dealing with
//! that: report which components are out of range, or pull them back in.

use crate::error::Component;

/// Describes a three-component color representation whose components have explicit bounds. The
/// order of components in [`bounds`](Bound::bounds), [`components`](Bound::components) and
/// [`labels`](Bound::labels) must agree.
/// # Example
/// Find and fix a clearly-problematic HSL triple.
///
/// ```
/// # use rgbhsl::prelude::*;
/// let bad = Hsl { hue: 0.25, sat: 1.4, lum: -0.1 };
/// assert_eq!(bad.out_of_bounds(), vec![(Component::Saturation, 1.4), (Component::Luminosity, -0.1)]);
/// let good = bad.clamp();
/// assert!(good.out_of_bounds().is_empty());
/// assert_eq!((good.hue, good.sat, good.lum), (0.25, 1.0, 0.0));
/// ```
pub trait Bound: Sized {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] giving the inclusive range of
    /// each component.
    fn bounds() -> [(f64, f64); 3];
    /// Names each component, for reporting.
    fn labels() -> [Component; 3];
    /// The current component values.
    fn components(&self) -> [f64; 3];
    /// Rebuilds a value from its components.
    fn from_components(components: [f64; 3]) -> Self;

    /// Every component that falls outside of its bounds, with its value, in component order. NaN
    /// counts as out of bounds. Empty when the value is valid.
    fn out_of_bounds(&self) -> Vec<(Component, f64)> {
        let ranges = Self::bounds();
        let labels = Self::labels();
        self.components()
            .iter()
            .zip(ranges.iter())
            .zip(labels.iter())
            .filter(|&((&value, &(min, max)), _)| !(min <= value && value <= max))
            .map(|((&value, _), &label)| (label, value))
            .collect()
    }

    /// Returns a copy with every component clamped into its bounds. NaN is left alone.
    fn clamp(&self) -> Self {
        let ranges = Self::bounds();
        let mut clamped = self.components();
        for (value, &(min, max)) in clamped.iter_mut().zip(ranges.iter()) {
            *value = num::clamp(*value, min, max);
        }
        Self::from_components(clamped)
    }
}
