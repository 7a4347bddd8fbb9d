//! The CIE 1931 XYZ color space, the device-independent hub the Lab spaces and Yxy are defined
//! from. Values are scaled so that the D65 white of sRGB has Y = 100.

use std::fmt;

use nalgebra::Vector3;
use serde_derive::{Deserialize, Serialize};

use crate::color::{linear_to_srgb, srgb_to_linear, Color, Rgb};
use crate::consts::{SRGB_TO_XYZ_MAT, XYZ_TO_SRGB_MAT};

/// A point in the CIE 1931 XYZ color space, relative to D65.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::Xyz;
/// let white: Xyz = Rgb::WHITE.convert();
/// assert!((white.x - 95.05).abs() < 0.01);
/// assert!((white.y - 100.0).abs() < 0.01);
/// assert!((white.z - 108.9).abs() < 0.01);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    /// The X tristimulus value, a mix of the cone responses.
    pub x: f64,
    /// The Y tristimulus value: luminance.
    pub y: f64,
    /// The Z tristimulus value, close to the short-wavelength cone response.
    pub z: f64,
}

impl Color for Xyz {
    fn from_rgb(rgb: Rgb) -> Xyz {
        let linear = Vector3::new(
            srgb_to_linear(rgb.r),
            srgb_to_linear(rgb.g),
            srgb_to_linear(rgb.b),
        );
        let xyz = SRGB_TO_XYZ_MAT() * linear * 100.0;
        Xyz {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    fn to_rgb(&self) -> Rgb {
        let linear = XYZ_TO_SRGB_MAT() * Vector3::new(self.x, self.y, self.z) / 100.0;
        Rgb::from_unit(
            linear_to_srgb(linear[0]),
            linear_to_srgb(linear[1]),
            linear_to_srgb(linear[2]),
        )
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4} {:.4} {:.4}", self.x, self.y, self.z)
    }
}

/// Converts channels to XYZ.
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    Xyz::from_rgb(Rgb { r, g, b })
}

/// Converts XYZ, scaled so white has `y` of 100, back to channels.
pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> Rgb {
    Xyz { x, y, z }.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_to_rgb() {
        let teal = rgb_to_xyz(0, 128, 128);
        assert_eq!(xyz_to_rgb(teal.x, teal.y, teal.z), Rgb { r: 0, g: 128, b: 128 });
    }

    #[test]
    fn test_known_values() {
        let black = rgb_to_xyz(0, 0, 0);
        assert_eq!((black.x, black.y, black.z), (0.0, 0.0, 0.0));
        let red = rgb_to_xyz(255, 0, 0);
        assert!((red.x - 41.24).abs() < 0.01);
        assert!((red.y - 21.26).abs() < 0.01);
        assert!((red.z - 1.93).abs() < 0.01);
        // luminance of a channel is its linear value times the Y row
        let orange = rgb_to_xyz(255, 87, 51);
        assert!((orange.y - 28.32).abs() < 0.01);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb { r, g, b };
                    assert_eq!(Xyz::from_rgb(rgb).to_rgb(), rgb);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(rgb_to_xyz(0, 0, 0).to_string(), "0.0000 0.0000 0.0000");
    }
}
