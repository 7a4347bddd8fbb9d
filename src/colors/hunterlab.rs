//! Hunter Lab, the 1948 predecessor of CIELAB that is still quoted on color reference pages. It
//! uses a square root instead of a cube root for lightness, and its opponent axes are scaled by
//! constants derived from the reference white.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use super::xyz::Xyz;
use crate::color::{Color, Rgb};
use crate::illuminants::Illuminant;

/// The `Ka` and `Kb` chromaticity coefficients for a white point.
fn coefficients(white: [f64; 3]) -> (f64, f64) {
    let [xn, yn, zn] = white;
    (175.0 / 198.04 * (xn + yn), 70.0 / 218.11 * (yn + zn))
}

/// A color in the Hunter Lab space.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::HunterLab;
/// let white: HunterLab = Rgb::WHITE.convert();
/// assert!((white.l - 100.0).abs() < 0.01);
/// let black: HunterLab = Rgb::BLACK.convert();
/// assert_eq!((black.l, black.a, black.b), (0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HunterLab {
    /// Lightness, between 0 and 100.
    pub l: f64,
    /// Red (positive) to green (negative).
    pub a: f64,
    /// Yellow (positive) to blue (negative).
    pub b: f64,
}

impl HunterLab {
    /// Converts an XYZ color to Hunter Lab relative to the given reference white. At zero
    /// luminance the opponent axes are undefined and are reported as 0.
    pub fn from_xyz_under(xyz: Xyz, illuminant: Illuminant) -> HunterLab {
        let white = illuminant.white_point();
        let [xn, yn, zn] = white;
        let (ka, kb) = coefficients(white);
        let y_ratio = xyz.y / yn;
        if y_ratio <= 0.0 {
            return HunterLab {
                l: 0.0,
                a: 0.0,
                b: 0.0,
            };
        }
        let root = y_ratio.sqrt();
        HunterLab {
            l: 100.0 * root,
            a: ka * (xyz.x / xn - y_ratio) / root,
            b: kb * (y_ratio - xyz.z / zn) / root,
        }
    }

    /// Returns the XYZ color that corresponds to this Hunter Lab color under the given reference
    /// white.
    pub fn to_xyz_under(&self, illuminant: Illuminant) -> Xyz {
        let white = illuminant.white_point();
        let [xn, yn, zn] = white;
        let (ka, kb) = coefficients(white);
        let root = self.l.max(0.0) / 100.0;
        let y_ratio = root * root;
        Xyz {
            x: (self.a / ka * root + y_ratio) * xn,
            y: y_ratio * yn,
            z: (y_ratio - self.b / kb * root) * zn,
        }
    }
}

impl Color for HunterLab {
    fn from_rgb(rgb: Rgb) -> HunterLab {
        HunterLab::from_xyz_under(Xyz::from_rgb(rgb), Illuminant::D65)
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz_under(Illuminant::D65).to_rgb()
    }
}

impl fmt::Display for HunterLab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4} {:.4} {:.4}", self.l, self.a, self.b)
    }
}

/// Converts channels to Hunter Lab under D65.
pub fn rgb_to_hunter_lab(r: u8, g: u8, b: u8) -> HunterLab {
    HunterLab::from_rgb(Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let red = rgb_to_hunter_lab(255, 0, 0);
        assert!((red.l - 46.11).abs() < 0.05);
        assert!(red.a > 70.0);
        assert!(red.b > 20.0);
        let blue = rgb_to_hunter_lab(0, 0, 255);
        assert!(blue.b < -100.0);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255u8).step_by(51) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb { r, g, b };
                    assert_eq!(HunterLab::from_rgb(rgb).to_rgb(), rgb);
                }
            }
        }
    }
}
