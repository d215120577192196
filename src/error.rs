//! Errors that can come out of building a [`Color`](../color/struct.Color.html). Conversions
//! themselves never fail: the only failures are an input that a strict
//! [`RangePolicy`](../options/enum.RangePolicy.html) refuses, a unit combination the library
//! doesn't support, or a string that isn't a color.

use thiserror::Error;

/// One of the three components of an HSL triple. Used to say which input was out of range.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    /// The hue, as a fraction of the full turn.
    Hue,
    /// The saturation.
    Saturation,
    /// The luminosity, also called lightness.
    Luminosity,
}

/// An error in building a color from numeric input.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A component fell outside of 0 to 1 after normalization, and the options in use reject
    /// such values instead of passing them through.
    #[error("{component:?} component {value} is outside of the normalized range 0 to 1")]
    OutOfRange {
        /// The offending component.
        component: Component,
        /// Its normalized value.
        value: f64,
    },
    /// The requested conversion is declared but not supported, such as RGB channels given in
    /// radians.
    #[error("conversion not supported: {0}")]
    Unsupported(&'static str),
}

/// An error in parsing a color string. Covers many different kinds of errors.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum ParseError {
    /// Non-numeric characters were used in a string on which a parse into a number was
    /// attempted.
    #[error("unexpected non-numeric characters")]
    InvalidNumericCharacters,
    /// Invalid numeric syntax was used, such as multiple periods or plus or minus in invalid
    /// places.
    #[error("invalid numeric syntax")]
    InvalidNumericSyntax,
    /// A general color syntax error, such as mismatching parentheses, a bad hex code, or the wrong
    /// number of components.
    #[error("invalid color syntax")]
    InvalidColorSyntax,
    /// A bare word that isn't one of the known color keywords.
    #[error("unknown color keyword")]
    UnknownKeyword,
}
