//! This file implements what would precisely be called sHSL: a simple transformation of sRGB that
//! creates a cylindrical space. HSL has the same problems with perceptual uniformity as sRGB does,
//! but it has the advantage of having some conception of common color attributes, which is why the
//! harmony and tone generators work in it. *Lightness* in HSL runs from black to fully saturated in
//! the middle to white at the end, which is what makes the monochromatic ramp and the
//! Dark/Medium/Light classification simple.
//!
//! Saturation and lightness are percentages, as on the web, but kept as `f64` so that converting
//! an [`Rgb`] color to HSL and back is exact. Use [`Hsl::rounded`] for display.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::{hexagonal_hue, hexagonal_rgb};
use crate::color::{Color, Rgb};
use crate::csscolor::{parse_hsl_hsv_str, CssParseError};

/// A color in the HSL color space.
/// # Example
/// As the page for any color reports it:
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::Hsl;
/// let orange = Rgb { r: 255, g: 87, b: 51 };
/// let hsl: Hsl = orange.convert();
/// assert_eq!(hsl.rounded(), (11, 100, 60));
/// assert_eq!(hsl.to_string(), "hsl(11, 100%, 60%)");
/// assert_eq!(hsl.to_rgb(), orange);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// The hue component, in degrees between 0 and 360. Exactly the same as the hue of HSV.
    pub h: f64,
    /// The saturation component, a percentage between 0 and 100.
    pub s: f64,
    /// The lightness component, a percentage between 0 and 100: the average of the largest and
    /// smallest sRGB components.
    pub l: f64,
}

impl Hsl {
    /// The integer triple `(h, s, l)` shown to users. The hue wraps, so 359.6° reads as 0°.
    pub fn rounded(&self) -> (u16, u8, u8) {
        (
            (self.h.rem_euclid(360.0).round() as u16) % 360,
            num::clamp(self.s.round(), 0.0, 100.0) as u8,
            num::clamp(self.l.round(), 0.0, 100.0) as u8,
        )
    }

    /// Returns this color with its hue rotated by `degrees`, wrapping into [0, 360).
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }
}

impl Color for Hsl {
    fn from_rgb(rgb: Rgb) -> Hsl {
        let (hue, max_c, min_c) = hexagonal_hue(rgb);
        let chroma = max_c - min_c;
        // lightness is the average of the largest and smallest components: a double hex cone
        let lightness = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness
        let saturation = if lightness >= 1.0 || lightness <= 0.0 {
            // this would be a divide by 0 otherwise
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl {
            h: hue,
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }

    fn to_rgb(&self) -> Rgb {
        let s = num::clamp(self.s / 100.0, 0.0, 1.0);
        let l = num::clamp(self.l / 100.0, 0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        hexagonal_rgb(self.h, chroma, l - chroma / 2.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", h, s, l)
    }
}

impl FromStr for Hsl {
    type Err = CssParseError;

    fn from_str(s: &str) -> Result<Hsl, CssParseError> {
        let (h, s, l) = parse_hsl_hsv_str(s, "hsl")?;
        Ok(Hsl { h, s, l })
    }
}

/// Converts channels to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    Hsl::from_rgb(Rgb { r, g, b })
}

/// Converts HSL, with saturation and lightness as percentages, back to channels.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    Hsl { h, s, l }.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red_hsl = rgb_to_hsl(255, 0, 0);
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 100.0).abs() <= 0.0001);
        assert!((red_hsl.l - 50.0).abs() <= 0.0001);
        let steel_rgb = hsl_to_rgb(210.0, 50.0, 40.0);
        assert_eq!(steel_rgb.to_string(), "#336699");
    }

    #[test]
    fn test_grays_have_no_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0).rounded(), (0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255).rounded(), (0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128).rounded(), (0, 0, 50));
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(3) {
                    let back = rgb_to_hsl(r, g, b).to_rgb();
                    assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
                    assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
                    assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_hsl_string_parsing() {
        let red: Hsl = "hsl(0, 120%, 50%)".parse().unwrap();
        assert_eq!(red.to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        let wrapped: Hsl = "hsl(-240, 100%, 50%)".parse().unwrap();
        assert_eq!(wrapped.to_rgb(), Rgb { r: 0, g: 255, b: 0 });
        assert!("hsl(254%, 0%, 0%)".parse::<Hsl>().is_err());
    }

    #[test]
    fn test_rotate_hue_wraps() {
        let blue = rgb_to_hsl(0, 0, 255);
        assert_eq!(blue.rotate_hue(180.0).h, 60.0);
        assert_eq!(blue.rotate_hue(-300.0).h, 300.0);
    }
}
