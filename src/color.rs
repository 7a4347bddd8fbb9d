//! This file defines the [`Color`] trait and the [`Rgb`] type every other color space is defined
//! against. sRGB with 8-bit channels is the pivot: each of the spaces in [`colors`] knows how to
//! get to and from it, and that is enough for any space to convert to any other by way of
//! [`Color::convert`].
//!
//! [`colors`]: ../colors/index.html

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

use crate::colors::{Hsl, Hsv};
use crate::coord::Coord;
use crate::csscolor::parse_rgb_str;
use crate::hex::Hex;

pub use crate::csscolor::CssParseError;

/// An error produced when a string cannot be read as a color or as one of the named enumerations
/// of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input is not an accepted hex code, nor any other supported color notation.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    /// The input looked like CSS functional notation but did not parse.
    #[error("invalid CSS color: {0}")]
    Css(#[from] CssParseError),
    /// The input does not name a harmony scheme.
    #[error("unknown harmony scheme: {0:?}")]
    UnknownScheme(String),
    /// The input does not name a color vision deficiency.
    #[error("unknown color vision deficiency: {0:?}")]
    UnknownDeficiency(String),
}

/// Decodes an sRGB channel into linear light, the first step of both the XYZ conversion and the
/// WCAG luminance formula: linear below 0.04045, a 2.4 power curve above.
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// The inverse of [`srgb_to_linear`], working on the unit range: takes linear light between 0 and 1
/// and returns the gamma-encoded value between 0 and 1. Out-of-range input is clamped first.
pub fn linear_to_srgb(linear: f64) -> f64 {
    let v = num::clamp(linear, 0.0, 1.0);
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in the sRGB space, with 8 bits per channel: exactly the colors a hex code can name.
///
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// let orange: Rgb = "#FF5733".parse().unwrap();
/// assert_eq!(orange, Rgb { r: 255, g: 87, b: 51 });
/// assert_eq!(orange.to_string(), "#FF5733");
/// // CSS functional notation works too
/// let same: Rgb = "rgb(255, 87, 51)".parse().unwrap();
/// assert_eq!(orange, same);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// Pure white.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Builds a color from channels given between 0 and 1, clamping and rounding to the nearest
    /// 8-bit value. This is how every floating-point color space lands back in sRGB.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Rgb {
        let to_u8 = |c: f64| {
            if c.is_nan() {
                0
            } else {
                (num::clamp(c, 0.0, 1.0) * 255.0).round() as u8
            }
        };
        Rgb {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// The channels scaled to the unit range.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Reads a hex code, in any of the forms described in [`hex`](../hex/index.html).
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorFormat`] for anything but an accepted hex code.
    pub fn from_hex_code(hex: &str) -> Result<Rgb, ColorParseError> {
        Hex::parse(hex).map(Hex::to_rgb)
    }

    /// The canonical hex code of this color.
    pub fn to_hex(self) -> Hex {
        Hex::from(self)
    }

    /// Returns `true` if all three channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Blends toward `other` by `t`, where 0 returns `self` and 1 returns `other`, by linear
    /// interpolation of the channels. `t` is clamped to [0, 1].
    pub fn blend(self, other: Rgb, t: f64) -> Rgb {
        let t = num::clamp(t, 0.0, 1.0);
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Rgb::from(c2.weighted_midpoint(&c1, t))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Rgb {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> (u8, u8, u8) {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<Rgb> for Coord {
    fn from(rgb: Rgb) -> Coord {
        Coord {
            x: f64::from(rgb.r),
            y: f64::from(rgb.g),
            z: f64::from(rgb.b),
        }
    }
}

/// Rounds and clamps each axis into a channel, so arithmetic on `Coord` can overshoot freely.
impl From<Coord> for Rgb {
    fn from(c: Coord) -> Rgb {
        Rgb::from_unit(c.x / 255.0, c.y / 255.0, c.z / 255.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts a hex code, or CSS `rgb(...)`, `hsl(...)` or `hsv(...)` functional notation.
    fn from_str(s: &str) -> Result<Rgb, ColorParseError> {
        let trimmed = s.trim();
        if trimmed.starts_with("rgb") {
            Ok(Rgb::from(parse_rgb_str(trimmed)?))
        } else if trimmed.starts_with("hsl") {
            Ok(trimmed.parse::<Hsl>()?.to_rgb())
        } else if trimmed.starts_with("hsv") {
            Ok(trimmed.parse::<Hsv>()?.to_rgb())
        } else {
            Rgb::from_hex_code(trimmed)
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A representation of color that can be reached from sRGB and brought back to it. Conversions
/// into the floating-point spaces are exact; conversions back round to the nearest 8-bit color and
/// clamp anything outside the sRGB gamut.
pub trait Color: Sized {
    /// Converts an sRGB color into this representation.
    fn from_rgb(rgb: Rgb) -> Self;
    /// Converts this color to the closest sRGB color.
    fn to_rgb(&self) -> Rgb;

    /// Converts this color into any other representation, going through sRGB.
    ///
    /// ```
    /// # use tincture::prelude::*;
    /// # use tincture::colors::{Hsl, Cmyk};
    /// let hsl = Hsl { h: 240.0, s: 100.0, l: 50.0 };
    /// let cmyk: Cmyk = hsl.convert();
    /// assert_eq!(cmyk.rounded(), (100, 100, 0, 0));
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }

    /// The canonical hex code of the closest sRGB color.
    fn to_hex(&self) -> Hex {
        Hex::from(self.to_rgb())
    }
}

impl Color for Rgb {
    fn from_rgb(rgb: Rgb) -> Rgb {
        rgb
    }
    fn to_rgb(&self) -> Rgb {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notations() {
        let expected = Rgb { r: 255, g: 87, b: 51 };
        assert_eq!("#FF5733".parse::<Rgb>(), Ok(expected));
        assert_eq!(" ff5733 ".parse::<Rgb>(), Ok(expected));
        assert_eq!("rgb(255, 87, 51)".parse::<Rgb>(), Ok(expected));
        assert_eq!(
            "hsl(240, 100%, 50%)".parse::<Rgb>(),
            Ok(Rgb { r: 0, g: 0, b: 255 })
        );
        assert_eq!(
            "hsv(120, 100%, 100%)".parse::<Rgb>(),
            Ok(Rgb { r: 0, g: 255, b: 0 })
        );
        assert_eq!(
            "rgb(1, 2)".parse::<Rgb>(),
            Err(ColorParseError::Css(CssParseError::InvalidColorSyntax))
        );
        assert_eq!(
            "tomato".parse::<Rgb>(),
            Err(ColorParseError::InvalidColorFormat("tomato".to_owned()))
        );
    }

    #[test]
    fn test_gamma_round_trip() {
        for c in 0..=255u8 {
            let back = (linear_to_srgb(srgb_to_linear(c)) * 255.0).round() as u8;
            assert_eq!(back, c);
        }
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_blend() {
        let c1 = Rgb::from((0, 0, 255));
        let c2 = Rgb::from((255, 0, 1));
        // rounding away from 0
        assert_eq!(c1.blend(c2, 0.5).to_string(), "#800080");
        assert_eq!(c1.blend(c2, 0.0), c1);
        assert_eq!(c1.blend(c2, 1.0), c2);
        assert_eq!(c1.blend(c2, 7.0), c2);
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(Rgb::from_unit(1.5, -0.1, 0.5), Rgb { r: 255, g: 0, b: 128 });
        assert_eq!(Rgb::from_unit(f64::NAN, 0.0, 1.0), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_serde() {
        let rgb = Rgb { r: 18, g: 52, b: 86 };
        let json = serde_json::to_string(&rgb).unwrap();
        assert_eq!(json, "\"#123456\"");
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), rgb);
    }
}
