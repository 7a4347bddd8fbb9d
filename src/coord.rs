//! This module contains a struct, [`Coord`], that models a 3D coordinate space and supports limited
//! math in 3 dimensions with scalars and other coordinates. Tint ramps, palette averaging and
//! Lab distances are all the same few operations on different projections of a color into 3D
//! space, so they share this type.

use std::ops::{Add, Div, Mul, Sub};

use serde_derive::{Deserialize, Serialize};

/// Represents a scalar value that can be losslessly widened to `f64`. Anything that falls under
/// this category can be multiplied by a [`Coord`] to scale it.
pub trait Scalar: Into<f64> + Copy {}

impl<T: Into<f64> + Copy> Scalar for T {}

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. Any color that converts to and from a
/// `Coord` matches its components with these axes in the order of the letters in its name: for
/// example, `CieLab` maps `l` to the x-axis, `a` to the y-axis and `b` to the z-axis.
///
/// # Examples
/// ```
/// # use tincture::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // only scalar multiplication and division, and only with the scalar on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(quot.y, 4.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// For any Coords c1, c2, and c3, c1 + c2 = c3 implies c3 - c2 = c1 and c3 - c1 = c2, down to
/// floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = rhs.into();
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

/// Division by zero follows IEEE rules and gives infinities, same as dividing each axis.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r: f64 = rhs.into();
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl Coord {
    /// The origin.
    pub const ORIGIN: Coord = Coord {
        x: 0.,
        y: 0.,
        z: 0.,
    };

    /// The midpoint between two 3D points.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord{x: 0.25, y: 0., z: 1.};
    /// let point2 = Coord{x: 0.75, y: 1., z: 1.};
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.weighted_midpoint(other, 0.5)
    }

    /// The weighted midpoint: like the midpoint, but with weighted averages instead of the
    /// arithmetic mean. A weight of 1 returns `self`, a weight of 0 returns `other`; weights outside
    /// [0, 1] extrapolate along the line.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// // shifted towards the second point
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        Coord {
            x: self.x * weight + (1.0 - weight) * other.x,
            y: self.y * weight + (1.0 - weight) * other.y,
            z: self.z * weight + (1.0 - weight) * other.z,
        }
    }

    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. Between two `CieLab` points this is the CIE76 color
    /// difference; in most other projections it is a poor stand-in for how different two colors
    /// look.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// The arithmetic mean of a collection of points, or `None` if there are none.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let points = vec![
    ///     Coord{x: 0., y: 0., z: 1.},
    ///     Coord{x: 1., y: 1., z: 1.},
    ///     Coord{x: 2., y: 1., z: 1.},
    /// ];
    /// let mean = Coord::average(&points).unwrap();
    /// assert!((mean.x - 1.).abs() <= 1e-10);
    /// assert!((mean.y - 2. / 3.).abs() <= 1e-10);
    /// assert!((mean.z - 1.).abs() <= 1e-10);
    /// assert!(Coord::average(&[]).is_none());
    /// ```
    pub fn average(points: &[Coord]) -> Option<Coord> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Coord::ORIGIN, |acc, p| acc + *p);
        Some(sum / points.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let p = Coord {
            x: 1.,
            y: -2.,
            z: 4.,
        };
        assert_eq!(p * 3u8, Coord { x: 3., y: -6., z: 12. });
        assert_eq!(p * 0.5f32, Coord { x: 0.5, y: -1., z: 2. });
        assert_eq!((p - p) + p, p);
        assert!((p / 0.0).x.is_infinite());
    }

    #[test]
    fn test_weighted_midpoint_ends() {
        let a = Coord { x: 10., y: 20., z: 30. };
        let b = Coord::ORIGIN;
        assert_eq!(a.weighted_midpoint(&b, 1.0), a);
        assert_eq!(a.weighted_midpoint(&b, 0.0), b);
        assert_eq!(a.midpoint(&b), Coord { x: 5., y: 10., z: 15. });
    }
}
