//! This file separates out the more finicky part of string parsing, in this case CSS numeric
//! notation: a number with an optional sign, optional decimal part, and an optional trailing '%'.
//! (Source for CSS syntax: [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use regex::Regex;

use crate::error::ParseError;

/// A CSS numeric value. Either a plain number, like 255 or 0.8, or a percentage, like 104%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A number with no unit, such as "124", "-3" or ".5".
    Number(f64),
    /// A number followed by '%', holding the number before the sign: "50%" is 50, not 0.5.
    Percentage(f64),
}

lazy_static! {
    // sign, then digits with an optional fraction or a bare fraction, then an optional percent
    static ref CSS_NUMBER: Regex = Regex::new(r"^([+-]?(?:\d+(?:\.\d+)?|\.\d+))(%?)$").unwrap();
}

/// Parses a given CSS number or percentage. Surrounding whitespace is not allowed: trim first.
pub(crate) fn parse_css_number(num: &str) -> Result<CSSNumeric, ParseError> {
    // if invalid characters, return the more specific error
    if num.is_empty() || !num.chars().all(|c| "0123456789-+.%".contains(c)) {
        return Err(ParseError::InvalidNumericCharacters);
    }
    let caps = CSS_NUMBER
        .captures(num)
        .ok_or(ParseError::InvalidNumericSyntax)?;
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| ParseError::InvalidNumericSyntax)?;
    if caps[2].is_empty() {
        Ok(CSSNumeric::Number(value))
    } else {
        Ok(CSSNumeric::Percentage(value))
    }
}
