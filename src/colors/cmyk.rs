//! The naive subtractive CMYK model used for print values on color pages. There is no ink profile
//! involved: K is simply how far the brightest channel is from full intensity, and C, M and Y are
//! what remains of each channel relative to that.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::color::{Color, Rgb};

/// A color as cyan, magenta, yellow and key (black) percentages between 0 and 100.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::Cmyk;
/// let cmyk: Cmyk = Rgb { r: 255, g: 87, b: 51 }.convert();
/// assert_eq!(cmyk.rounded(), (0, 66, 80, 0));
/// assert_eq!(cmyk.to_string(), "cmyk(0%, 66%, 80%, 0%)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan.
    pub c: f64,
    /// Magenta.
    pub m: f64,
    /// Yellow.
    pub y: f64,
    /// Key.
    pub k: f64,
}

impl Cmyk {
    /// The integer percentages `(c, m, y, k)` shown to users.
    pub fn rounded(&self) -> (u8, u8, u8, u8) {
        let pct = |v: f64| num::clamp(v.round(), 0.0, 100.0) as u8;
        (pct(self.c), pct(self.m), pct(self.y), pct(self.k))
    }
}

impl Color for Cmyk {
    fn from_rgb(rgb: Rgb) -> Cmyk {
        let (r, g, b) = rgb.to_unit();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            // pure black: no ink but key, and no division by zero
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k) * 100.0;
        Cmyk {
            c: ink(r),
            m: ink(g),
            y: ink(b),
            k: k * 100.0,
        }
    }

    fn to_rgb(&self) -> Rgb {
        let k = num::clamp(self.k / 100.0, 0.0, 1.0);
        let channel = |ink: f64| (1.0 - num::clamp(ink / 100.0, 0.0, 1.0)) * (1.0 - k);
        Rgb::from_unit(channel(self.c), channel(self.m), channel(self.y))
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (c, m, y, k) = self.rounded();
        write!(f, "cmyk({}%, {}%, {}%, {}%)", c, m, y, k)
    }
}

/// Converts channels to CMYK.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    Cmyk::from_rgb(Rgb { r, g, b })
}

/// Converts CMYK percentages back to channels.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> Rgb {
    Cmyk { c, m, y, k }.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk_to_rgb() {
        assert_eq!(cmyk_to_rgb(0.0, 100.0, 100.0, 0.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), Rgb::BLACK);
    }

    #[test]
    fn test_black_special_case() {
        let black = rgb_to_cmyk(0, 0, 0);
        assert_eq!(black.rounded(), (0, 0, 0, 100));
        assert!(black.c.is_finite() && black.m.is_finite() && black.y.is_finite());
        assert_eq!(black.to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_cmyk(255, 255, 255).rounded(), (0, 0, 0, 0));
        assert_eq!(rgb_to_cmyk(255, 0, 0).rounded(), (0, 100, 100, 0));
        assert_eq!(rgb_to_cmyk(0, 128, 0).rounded(), (100, 0, 100, 50));
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb { r, g, b };
                    assert_eq!(Cmyk::from_rgb(rgb).to_rgb(), rgb);
                }
            }
        }
    }
}
