//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes the [`Color`] and [`Hsl`] types, the
//! [`Bound`] trait, the conversion options and their enums, and both error types. The packing
//! functions are not included: reach for [`Color::from_compound`] and [`Color::to_compound`]
//! instead, or import them from [`packing`](../packing/index.html) directly.

pub use crate::bound::Bound;
pub use crate::color::Color;
pub use crate::error::{Component, ConversionError, ParseError};
pub use crate::hsl::Hsl;
pub use crate::options::{ChannelUnit, ComponentScale, ConversionOptions, HueUnit, RangePolicy};
