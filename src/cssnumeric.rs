//! This file separates out the more difficult aspects of string parsing, in this case dealing with
//! CSS numeric notation and all of its warts. The color tools accept pasted CSS such as
//! `rgb(255, 87, 51)` or `hsl(11, 100%, 60%)` alongside hex codes, and every component of those
//! strings goes through [`parse_css_number`]. (Source for CSS syntax:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use thiserror::Error;

/// A CSS numeric value. Either an integer, like 255, a float, like 0.8, or a percentage, like
/// 104%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CssNumeric {
    /// A string of digits, such as "124", with an optional leading '+' or '-'.
    Integer(i64),
    /// Two digit strings separated by a '.', such that the second has no leading sign.
    Float(f64),
    /// An integer followed by '%', to denote one one-hundredth of that integer.
    Percentage(i64),
}

impl CssNumeric {
    /// The plain value of the number, with percentages left as written (so "50%" is 50.0).
    pub(crate) fn value(self) -> f64 {
        match self {
            CssNumeric::Integer(val) | CssNumeric::Percentage(val) => val as f64,
            CssNumeric::Float(val) => val,
        }
    }
}

/// An error in parsing a CSS string. Covers many different kinds of errors.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum CssParseError {
    /// Non-numeric characters were used in a string on which a parse into a number was attempted.
    #[error("unexpected non-numeric characters")]
    InvalidNumericCharacters,
    /// Invalid numeric syntax was used, such as multiple periods or plus or minus in invalid
    /// places.
    #[error("invalid numeric syntax")]
    InvalidNumericSyntax,
    /// A general color syntax error occurred, such as mismatching parentheses or the wrong number
    /// of components.
    #[error("invalid color syntax")]
    InvalidColorSyntax,
}

/// Parses an unsigned run of digits, such as "023" or "142".
fn parse_css_integer(digits: &str) -> Result<i64, CssParseError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CssParseError::InvalidNumericSyntax);
    }
    digits
        .parse()
        .map_err(|_| CssParseError::InvalidNumericSyntax)
}

/// Parses an unsigned CSS float, such as "123.42" or ".34".
fn parse_css_float(num: &str) -> Result<f64, CssParseError> {
    if num == "." || num.contains('%') {
        return Err(CssParseError::InvalidNumericSyntax);
    }
    num.parse().map_err(|_| CssParseError::InvalidNumericSyntax)
}

/// Parses a given CSS float (two integers separated by '.'), CSS integer (a string of characters
/// '0'-'9') or a CSS percentage (an integer followed by '%'). Percentages are integral only:
/// "45.5%" is rejected, as most browsers of the CSS3 era did.
pub(crate) fn parse_css_number(num: &str) -> Result<CssNumeric, CssParseError> {
    if num.is_empty() {
        return Err(CssParseError::InvalidNumericSyntax);
    }
    if !num.chars().all(|c| "0123456789-+.%".contains(c)) {
        return Err(CssParseError::InvalidNumericCharacters);
    }
    // strip one leading sign
    let (is_positive, body) = match num.as_bytes()[0] {
        b'-' => (false, &num[1..]),
        b'+' => (true, &num[1..]),
        _ => (true, num),
    };
    if body.is_empty() || body.contains(|c| c == '-' || c == '+') {
        return Err(CssParseError::InvalidNumericSyntax);
    }
    let sign = if is_positive { 1 } else { -1 };

    match body.matches('.').count() {
        0 => match body.matches('%').count() {
            0 => Ok(CssNumeric::Integer(sign * parse_css_integer(body)?)),
            1 => match body.strip_suffix('%') {
                Some(digits) => Ok(CssNumeric::Percentage(sign * parse_css_integer(digits)?)),
                None => Err(CssParseError::InvalidNumericSyntax),
            },
            _ => Err(CssParseError::InvalidNumericSyntax),
        },
        1 => Ok(CssNumeric::Float(sign as f64 * parse_css_float(body)?)),
        _ => Err(CssParseError::InvalidNumericSyntax),
    }
}
