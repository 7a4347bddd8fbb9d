//! Hex codes are the currency of the whole crate: every page is addressed by one, every generated
//! palette is rendered as a list of them. This module validates and canonicalizes them.
//!
//! The accepted forms are the same at every entry point: an optional leading `#`, surrounding
//! whitespace, any letter case, and either six digits or the three-digit shorthand (`abc` is
//! `#AABBCC`). The canonical form is always `#` followed by six uppercase digits.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::color::{ColorParseError, Rgb};

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
        .expect("hex code pattern is valid");
}

/// Returns `true` if the input is a hex code this crate accepts: six (or three) hexadecimal digits,
/// optionally preceded by `#`, ignoring surrounding whitespace.
///
/// ```
/// # use tincture::hex::is_valid_hex;
/// assert!(is_valid_hex("#ff5733"));
/// assert!(is_valid_hex("FF5733"));
/// assert!(is_valid_hex("#abc"));
/// assert!(!is_valid_hex("#ff573"));
/// assert!(!is_valid_hex("##ff5733"));
/// ```
pub fn is_valid_hex(input: &str) -> bool {
    HEX_CODE.is_match(input.trim())
}

/// Puts a hex code into canonical form: trimmed, one leading `#` stripped, shorthand expanded,
/// uppercased and prefixed with `#`. This does not reject malformed input, it only reshapes it:
/// call [`is_valid_hex`] or use [`Hex::parse`] when correctness matters.
///
/// ```
/// # use tincture::hex::normalize_hex;
/// assert_eq!(normalize_hex("ff5733"), "#FF5733");
/// assert_eq!(normalize_hex(" #abc "), "#AABBCC");
/// assert_eq!(normalize_hex("#nothex"), "#NOTHEX");
/// ```
pub fn normalize_hex(input: &str) -> String {
    let stripped = input.trim();
    let stripped = stripped.strip_prefix('#').unwrap_or(stripped);
    let digits: String = if stripped.len() == 3 && stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        stripped.chars().flat_map(|c| [c, c]).collect()
    } else {
        stripped.to_owned()
    };
    format!("#{}", digits.to_uppercase())
}

/// Parses the three channel bytes out of an accepted hex code.
fn parse_channels(input: &str) -> Option<[u8; 3]> {
    if !is_valid_hex(input) {
        trace!("rejected hex code {:?}", input);
        return None;
    }
    let canonical = normalize_hex(input);
    // it's easier to do math on the hex value than it is to slice strings
    let full_num = u32::from_str_radix(&canonical[1..], 16).ok()?;
    Some([(full_num >> 16) as u8, (full_num >> 8) as u8, full_num as u8])
}

/// A validated hex color code. Displays, and serializes, in canonical `#RRGGBB` form, and compares
/// equal regardless of how it was originally written.
///
/// ```
/// # use tincture::hex::Hex;
/// let hex = Hex::parse("#ff5733").unwrap();
/// assert_eq!(hex.to_string(), "#FF5733");
/// assert_eq!(hex, Hex::parse("FF5733").unwrap());
/// assert!(Hex::parse("#ff57").is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Validates and canonicalizes a hex code.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
    pub fn parse(input: &str) -> Result<Hex, ColorParseError> {
        parse_channels(input)
            .map(Hex)
            .ok_or_else(|| ColorParseError::InvalidColorFormat(input.to_owned()))
    }

    /// The color this code names.
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = self.0;
        Rgb { r, g, b }
    }

    /// The six uppercase digits without the `#`, as used in page slugs and file names.
    pub fn digits(self) -> String {
        let [r, g, b] = self.0;
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Hex {
        Hex([rgb.r, rgb.g, rgb.b])
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Rgb {
        hex.to_rgb()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

impl FromStr for Hex {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Hex, ColorParseError> {
        Hex::parse(s)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Hex, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hex::parse(&s).map_err(de::Error::custom)
    }
}

/// Parses a hex code straight into its channels.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorParseError> {
    Hex::parse(input).map(Hex::to_rgb)
}

/// Formats channels as a canonical hex code string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Hex::from(Rgb { r, g, b }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        for good in &["#FF5733", "ff5733", "  #Ff5733\n", "#abc", "ABC", "#000000"] {
            assert!(is_valid_hex(good), "{} should be valid", good);
        }
        for bad in &["", "#", "#ff57", "#ff57330", "#gg5733", "##ff5733", "ff 5733", "#abcd"] {
            assert!(!is_valid_hex(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_hex("#ff5733"), "#FF5733");
        assert_eq!(normalize_hex("Ff69B4"), "#FF69B4");
        assert_eq!(normalize_hex("f0a"), "#FF00AA");
        // only one '#' is stripped, and junk is passed through
        assert_eq!(normalize_hex("##12"), "##12");
        assert_eq!(normalize_hex(""), "#");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF5733"), Ok(Rgb { r: 255, g: 87, b: 51 }));
        assert_eq!(hex_to_rgb("#abc"), Ok(Rgb { r: 170, g: 187, b: 204 }));
        assert_eq!(
            hex_to_rgb("#12345"),
            Err(ColorParseError::InvalidColorFormat("#12345".to_owned()))
        );
    }

    #[test]
    fn test_rgb_hex_round_trip() {
        // a strided walk through the cube, hitting both ends of every channel
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(3) {
                    let hex = rgb_to_hex(r, g, b);
                    assert_eq!(hex_to_rgb(&hex), Ok(Rgb { r, g, b }));
                }
            }
        }
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
    }

    #[test]
    fn test_serde() {
        let hex = Hex::parse("#0a0b0c").unwrap();
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#0A0B0C\"");
        let back: Hex = serde_json::from_str("\"0a0b0c\"").unwrap();
        assert_eq!(back, hex);
        assert!(serde_json::from_str::<Hex>("\"not a color\"").is_err());
    }
}
