//! This module provides an enum of the CIE standard illuminants, as well as a table of white point
//! values for them. The source for this table is the [ASTM E308
//! standard](https://www.astm.org/Standards/E308.htm), which copies the CIE tables for the 2°
//! observer. These are normalized so that the Y (luminance) value is 100, the same scale
//! [`Xyz`](../colors/xyz/struct.Xyz.html) uses.
//!
//! sRGB is defined under D65, so D65 is what every conversion in this crate uses unless told
//! otherwise. The others exist for the `*_under` constructors of the Lab spaces.

use serde_derive::{Deserialize, Serialize};

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. The most common ones for computers are D50 and D65, differing kinds of
/// daylight.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon light, the print industry's reference.
    D50,
    /// Mid-morning or mid-afternoon daylight.
    D55,
    /// Noon daylight, the white point of sRGB.
    #[default]
    D65,
    /// North sky daylight.
    D75,
    /// A light of any given color, as an array [X, Y, Z] in CIE 1931 space.
    Custom([f64; 3]),
}

/// An array of the standard illuminants, in the same order as the table below.
pub static ILLUMINANTS: [Illuminant; 4] = [
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
];

/// White point values for the standard illuminants, in the order of [`ILLUMINANTS`]. Each white
/// point is an array of 3 `f64` values X, Y, and Z, normalized so that Y is 100.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 4] = [
    [96.422, 100.000, 82.521],
    [95.682, 100.000, 92.129],
    [95.047, 100.000, 108.883],
    [94.972, 100.000, 122.638],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant. Custom white points
    /// are rescaled so that Y is 100; a custom point with Y of 0 has no meaningful scale and is
    /// treated as D65.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[3],
            Illuminant::Custom(xyz) if xyz[1] > 0.0 => [
                xyz[0] * 100.0 / xyz[1],
                100.0,
                xyz[2] * 100.0 / xyz[1],
            ],
            Illuminant::Custom(_) => ILLUMINANT_WHITE_POINTS[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_points() {
        assert_eq!(Illuminant::default(), Illuminant::D65);
        for illuminant in ILLUMINANTS.iter() {
            assert_eq!(illuminant.white_point()[1], 100.0);
        }
        let custom = Illuminant::Custom([0.5, 0.5, 0.25]);
        assert_eq!(custom.white_point(), [100.0, 100.0, 50.0]);
        assert_eq!(
            Illuminant::Custom([1.0, 0.0, 1.0]).white_point(),
            Illuminant::D65.white_point()
        );
    }
}
