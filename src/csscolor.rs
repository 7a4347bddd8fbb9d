//! This file uses the CSS numeric parsing in `cssnumeric.rs` to parse CSS functional color notation
//! as the W3C CSS Color Module Level 3 defines it. The only difference is that arithmetic is not supported to
//! specify colors. Its end goal is the implementation of `FromStr` for RGB, HSL, and HSV colors,
//! although the specific `impl` blocks are in their respective source files. The full
//! definition is at [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/). One quick
//! caveat: as is relatively standard, percents are only integral: "45.5%" will be treated as
//! invalid.

use crate::cssnumeric::{parse_css_number, CssNumeric};
pub use crate::cssnumeric::CssParseError;

/// Given a string, attempts to parse as a CSS numeric. If successful, interprets the number given as
/// a component of an RGB color, clamping accordingly. Returns the appropriate `u8`: e.g., "102%" maps
/// to 255, and "0.5" maps to 127. Floats are read as fractions of full intensity.
fn parse_rgb_num(num: &str) -> Result<u8, CssParseError> {
    match parse_css_number(num)? {
        CssNumeric::Integer(val) => Ok(num::clamp(val, 0, 255) as u8),
        CssNumeric::Float(val) => {
            // the minus bit is to adjust rounding so that, e.g., 0.5 maps to 127 not 128
            Ok((num::clamp(val, 0.0, 1.0) * 255. - 0.000001).round().max(0.0) as u8)
        }
        CssNumeric::Percentage(val) => Ok((num::clamp(val, 0, 100) as f64 * 2.55).round() as u8),
    }
}

/// Strips `name(` and `)` from a functional notation string, returning the comma-separated
/// arguments with surrounding whitespace removed.
fn function_args<'a>(input: &'a str, name: &str) -> Result<Vec<&'a str>, CssParseError> {
    let inner = input
        .trim()
        .strip_prefix(name)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(CssParseError::InvalidColorSyntax)?;
    let args: Vec<&str> = inner.split(',').map(str::trim).collect();
    if args.len() != 3 || args.iter().any(|arg| arg.is_empty()) {
        return Err(CssParseError::InvalidColorSyntax);
    }
    Ok(args)
}

/// Parses a string of the form "rgb(r, g, b)", where r, g, and b are numbers, returning a tuple of
/// u8s for the three components. The function name is case-sensitive: "RGB(...)" is rejected.
pub(crate) fn parse_rgb_str(input: &str) -> Result<(u8, u8, u8), CssParseError> {
    let args = function_args(input, "rgb")?;
    Ok((
        parse_rgb_num(args[0])?,
        parse_rgb_num(args[1])?,
        parse_rgb_num(args[2])?,
    ))
}

/// Parses the three components of "hsl(h, s%, l%)" or "hsv(h, s%, v%)" given the function name.
/// The hue must be a plain number and wraps into [0, 360); the other two must be percentages and
/// are clamped to [0, 100].
pub(crate) fn parse_hsl_hsv_str(input: &str, name: &str) -> Result<(f64, f64, f64), CssParseError> {
    let args = function_args(input, name)?;
    let hue = match parse_css_number(args[0])? {
        CssNumeric::Percentage(_) => return Err(CssParseError::InvalidColorSyntax),
        other => other.value().rem_euclid(360.0),
    };
    let percent = |arg: &str| -> Result<f64, CssParseError> {
        match parse_css_number(arg)? {
            CssNumeric::Percentage(val) => Ok(num::clamp(val, 0, 100) as f64),
            _ => Err(CssParseError::InvalidColorSyntax),
        }
    };
    Ok((hue, percent(args[1])?, percent(args[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_num_parsing() {
        // integers
        assert_eq!(Ok(104u8), parse_rgb_num("104"));
        assert_eq!(Ok(255u8), parse_rgb_num("234923"));
        // floats
        assert_eq!(Ok(123u8), parse_rgb_num(".48235"));
        assert_eq!(Ok(255u8), parse_rgb_num("1.04"));
        // percents
        assert_eq!(Ok(122u8), parse_rgb_num("48%"));
        assert_eq!(Ok(255u8), parse_rgb_num("115%"));
        // errors
        assert_eq!(Err(CssParseError::InvalidNumericCharacters), parse_rgb_num("abc"));
        assert_eq!(Err(CssParseError::InvalidNumericSyntax), parse_rgb_num("123%%"));
    }

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(parse_rgb_str("rgb(125, 20%, 0.5)"), Ok((125, 51, 127)));
        // clamping in every direction
        assert_eq!(parse_rgb_str("rgb(-125, -20%, 10.5)"), Ok((0, 0, 255)));
        assert_eq!(parse_rgb_str("  rgb(255,87,51) "), Ok((255, 87, 51)));
        assert_eq!(
            Err(CssParseError::InvalidColorSyntax),
            parse_rgb_str("rgB(123, 33, 2)")
        );
        assert_eq!(
            Err(CssParseError::InvalidColorSyntax),
            parse_rgb_str("rgb(123, 123, 41, 22)")
        );
        assert_eq!(Err(CssParseError::InvalidColorSyntax), parse_rgb_str("rgb(())"));
        assert_eq!(Err(CssParseError::InvalidColorSyntax), parse_rgb_str("rgb(1, , 3)"));
    }

    #[test]
    fn test_hsl_str_parsing() {
        assert_eq!(
            parse_hsl_hsv_str("hsl(11, 100%, 60%)", "hsl"),
            Ok((11.0, 100.0, 60.0))
        );
        // hue wraps, percentages clamp
        assert_eq!(
            parse_hsl_hsv_str("hsv(-445, 24%, 1000%)", "hsv"),
            Ok((275.0, 24.0, 100.0))
        );
        assert!(parse_hsl_hsv_str("hsv(254%, 0%, 0%)", "hsv").is_err());
        assert!(parse_hsl_hsv_str("hsl(10, 0.5, 50%)", "hsl").is_err());
        assert!(parse_hsl_hsv_str("hsl(10, 50%, 50%)", "hsv").is_err());
    }
}
