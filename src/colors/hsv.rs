//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but it is what the picker's
//! saturation/brightness square is built on.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::{hexagonal_hue, hexagonal_rgb};
use crate::color::{Color, Rgb};
use crate::csscolor::{parse_hsl_hsv_str, CssParseError};

/// An HSV color, defining parameters for hue, saturation, and value from the sRGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::Hsv;
/// let red = Hsv { h: 0., s: 50., v: 80. };
/// let yellow = Hsv { h: 50., s: 50., v: 80. };
/// assert_eq!(red.to_rgb().to_string(), "#CC6666");
/// assert_eq!(yellow.to_rgb().to_string(), "#CCBB66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// The hue, in degrees between 0 and 360.
    pub h: f64,
    /// The saturation, the distance between the color and the gray of the same value, as a
    /// percentage between 0 and 100.
    pub s: f64,
    /// The value, the largest sRGB component, as a percentage between 0 and 100.
    pub v: f64,
}

impl Hsv {
    /// The integer triple `(h, s, v)` shown to users.
    pub fn rounded(&self) -> (u16, u8, u8) {
        (
            (self.h.rem_euclid(360.0).round() as u16) % 360,
            num::clamp(self.s.round(), 0.0, 100.0) as u8,
            num::clamp(self.v.round(), 0.0, 100.0) as u8,
        )
    }
}

impl Color for Hsv {
    fn from_rgb(rgb: Rgb) -> Hsv {
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let chroma = max_c - min_c;
        let saturation = if max_c <= 0.0 {
            // this would be a divide by 0 otherwise
            0.0
        } else {
            chroma / max_c
        };
        Hsv {
            h: hue,
            s: saturation * 100.0,
            v: max_c * 100.0,
        }
    }

    fn to_rgb(&self) -> Rgb {
        let s = num::clamp(self.s / 100.0, 0.0, 1.0);
        let v = num::clamp(self.v / 100.0, 0.0, 1.0);
        let chroma = s * v;
        hexagonal_rgb(self.h, chroma, v - chroma)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (h, s, v) = self.rounded();
        write!(f, "hsv({}, {}%, {}%)", h, s, v)
    }
}

impl FromStr for Hsv {
    type Err = CssParseError;

    fn from_str(s: &str) -> Result<Hsv, CssParseError> {
        let (h, s, v) = parse_hsl_hsv_str(s, "hsv")?;
        Ok(Hsv { h, s, v })
    }
}

/// Converts channels to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    Hsv::from_rgb(Rgb { r, g, b })
}

/// Converts HSV, with saturation and value as percentages, back to channels.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    Hsv { h, s, v }.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_round_trip() {
        let hsv = rgb_to_hsv(51, 102, 153);
        assert_eq!(hsv_to_rgb(hsv.h, hsv.s, hsv.v), Rgb { r: 51, g: 102, b: 153 });
    }

    #[test]
    fn test_hsv_rgb_conversion() {
        let red_hsv = rgb_to_hsv(255, 0, 0);
        assert!(red_hsv.h.abs() <= 0.0001);
        assert!((red_hsv.s - 100.0).abs() <= 0.0001);
        assert!((red_hsv.v - 100.0).abs() <= 0.0001);
        assert_eq!(rgb_to_hsv(255, 87, 51).rounded(), (11, 80, 100));
        assert_eq!(rgb_to_hsv(0, 0, 0).rounded(), (0, 0, 0));
    }

    #[test]
    fn test_hsv_string_parsing() {
        let red_hsv: Hsv = "hsv(0, 120%, 50%)".parse().unwrap();
        assert!(red_hsv.h.abs() <= 0.0001);
        assert!((red_hsv.s - 100.0).abs() <= 0.0001);
        assert!((red_hsv.v - 50.0).abs() <= 0.0001);
        let lavender_hsv: Hsv = "hsv(-445, 24%, 1000%)".parse().unwrap();
        assert_eq!(lavender_hsv.rounded(), (275, 24, 100));
        let blue: Hsv = "hsv(240, 100%, 100%)".parse().unwrap();
        assert_eq!(blue.to_rgb().to_string(), "#0000FF");
        assert!("hsv(254%, 0%, 0%)".parse::<Hsv>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb { r, g, b };
                    assert_eq!(Hsv::from_rgb(rgb).to_rgb(), rgb);
                }
            }
        }
    }
}
