//! rgbhsl converts colors between three encodings: discrete RGB channels, HSL triples, and
//! single packed integers where red, green and blue sit in consecutive bytes. Every conversion
//! produces the same canonical [`Color`](color::Color) value, which stores the RGB bytes and
//! derives HSL from them whenever asked, so the two views can never disagree.
//!
//! HSL input can arrive normalized (everything from 0 to 1), in "standard" human units (degrees
//! and percentages), or with the hue in radians. Each has its own constructor, and
//! [`Color::from_hsl_with`](color::Color::from_hsl_with) takes a
//! [`ConversionOptions`](options::ConversionOptions) that spells out the units, truncation and
//! out-of-range handling explicitly.
//!
//! ```
//! # use rgbhsl::prelude::*;
//! let purple = Color::from_hsl_standard(270., 100., 50.);
//! assert_eq!(purple.to_string(), "#8000FF");
//! assert_eq!(purple.to_compound(), 0xFF0080);
//! ```

#![doc(html_root_url = "https://docs.rs/rgbhsl/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

extern crate regex;
extern crate num;
extern crate float_cmp;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod bound;
pub mod color;
mod csscolor;
mod cssnumeric;
pub mod error;
pub mod hsl;
pub mod options;
pub mod packing;
pub mod prelude;
