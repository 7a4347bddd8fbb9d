//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, a\*, and b\* to distinguish them from [Hunter Lab](../hunterlab/index.html), but for
//! convenience they are just `l`, `a`, and `b` in this module.
//!
//! Straight-line distance in this space is the CIE76 color difference, which is what the related
//! colors lookup and the palette extractor measure similarity with.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use super::xyz::Xyz;
use crate::color::{Color, Rgb};
use crate::coord::Coord;
use crate::illuminants::Illuminant;

const DELTA: f64 = 6.0 / 29.0;

/// The nonlinearity that models human lightness perception, with a linear toe near black.
fn f(t: f64) -> f64 {
    if t <= DELTA.powi(3) {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    } else {
        t.cbrt()
    }
}

/// The inverse of [`f`].
fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// A color in the CIELAB color space.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::CieLab;
/// let white: CieLab = Rgb::WHITE.convert();
/// assert!((white.l - 100.0).abs() < 0.01);
/// // the rounded sRGB matrix leaves white a hair off neutral
/// assert!(white.a.abs() < 0.02 && white.b.abs() < 0.02);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CieLab {
    /// The lightness of a given color. 0 is black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis: negative is green, positive is magenta. Usually between -128
    /// and 127 for sRGB colors.
    pub a: f64,
    /// The second opponent color axis: negative is blue, positive is yellow.
    pub b: f64,
}

impl CieLab {
    /// Converts an XYZ color to CIELAB relative to the given reference white.
    pub fn from_xyz_under(xyz: Xyz, illuminant: Illuminant) -> CieLab {
        let [xn, yn, zn] = illuminant.white_point();
        let fx = f(xyz.x / xn);
        let fy = f(xyz.y / yn);
        let fz = f(xyz.z / zn);
        // the nonlinearity is already applied, so this is just simple linear formulae
        CieLab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Returns the XYZ color that corresponds to this CIELAB color under the given reference white.
    pub fn to_xyz_under(&self, illuminant: Illuminant) -> Xyz {
        let [xn, yn, zn] = illuminant.white_point();
        let fy = (self.l + 16.0) / 116.0;
        Xyz {
            x: xn * f_inv(fy + self.a / 500.0),
            y: yn * f_inv(fy),
            z: zn * f_inv(fy - self.b / 200.0),
        }
    }

    /// The CIE76 color difference: Euclidean distance in CIELAB. A difference around 2.3 is the
    /// smallest most people can notice.
    pub fn delta_e(&self, other: &CieLab) -> f64 {
        Coord::from(*self).euclidean_distance(&Coord::from(*other))
    }
}

impl Color for CieLab {
    fn from_rgb(rgb: Rgb) -> CieLab {
        CieLab::from_xyz_under(Xyz::from_rgb(rgb), Illuminant::D65)
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz_under(Illuminant::D65).to_rgb()
    }
}

impl From<CieLab> for Coord {
    fn from(lab: CieLab) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}

impl From<Coord> for CieLab {
    fn from(c: Coord) -> CieLab {
        CieLab {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl fmt::Display for CieLab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4} {:.4} {:.4}", self.l, self.a, self.b)
    }
}

/// Converts channels to CIELAB under D65.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> CieLab {
    CieLab::from_rgb(Rgb { r, g, b })
}
