//! CIE Yxy: luminance plus the two chromaticity coordinates of the 1931 diagram. It carries the
//! same information as XYZ, split into "how bright" and "which color".

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use super::xyz::Xyz;
use crate::color::{Color, Rgb};

/// A color as luminance `Y` and chromaticity `x`, `y`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yxy {
    /// Luminance, on the same 0-100 scale as [`Xyz::y`].
    pub luminance: f64,
    /// The x chromaticity coordinate, X / (X + Y + Z).
    pub x: f64,
    /// The y chromaticity coordinate, Y / (X + Y + Z).
    pub y: f64,
}

impl Yxy {
    /// Projects an XYZ color onto the chromaticity diagram. Black has no chromaticity; it is
    /// reported as `x = y = 0`.
    pub fn from_xyz(xyz: Xyz) -> Yxy {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum <= 0.0 {
            return Yxy {
                luminance: xyz.y,
                x: 0.0,
                y: 0.0,
            };
        }
        Yxy {
            luminance: xyz.y,
            x: xyz.x / sum,
            y: xyz.y / sum,
        }
    }

    /// Undoes the projection. A `y` of 0 only happens for black.
    pub fn to_xyz(&self) -> Xyz {
        if self.y <= 0.0 {
            return Xyz {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let scale = self.luminance / self.y;
        Xyz {
            x: self.x * scale,
            y: self.luminance,
            z: (1.0 - self.x - self.y) * scale,
        }
    }
}

impl Color for Yxy {
    fn from_rgb(rgb: Rgb) -> Yxy {
        Yxy::from_xyz(Xyz::from_rgb(rgb))
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }
}

impl fmt::Display for Yxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.4} {:.4} {:.4}", self.luminance, self.x, self.y)
    }
}

/// Converts channels to Yxy.
pub fn rgb_to_yxy(r: u8, g: u8, b: u8) -> Yxy {
    Yxy::from_rgb(Rgb { r, g, b })
}
