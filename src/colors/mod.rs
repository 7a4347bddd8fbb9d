//! This module contains the types that implement [`Color`] other than [`Rgb`] itself. For
//! convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Rgb`]: ../color/struct.Rgb.html
pub mod cielab;
pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod hunterlab;
pub mod xyz;
pub mod yxy;

// for convenience, use this namespace for the color objects
pub use self::cielab::CieLab;
pub use self::cmyk::Cmyk;
pub use self::hsl::Hsl;
pub use self::hsv::Hsv;
pub use self::hunterlab::HunterLab;
pub use self::xyz::Xyz;
pub use self::yxy::Yxy;

use float_cmp::approx_eq;

use crate::color::Rgb;

/// The hexagonal projection shared by HSL and HSV: returns the hue in degrees in [0, 360) along
/// with the largest and smallest channel on the unit scale.
///
/// If you tilt the RGB cube and project it into a hexagon, the equivalent of radius is simply the
/// largest component minus the smallest component, and the hue is the proportion of the way around
/// the hexagon, treated as degrees. Gray has no hue; it gets 0.
/// More info: <https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation>
pub(crate) fn hexagonal_hue(rgb: Rgb) -> (f64, f64, f64) {
    let (r, g, b) = rgb.to_unit();
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let chroma = max_c - min_c;

    let hue = if approx_eq!(f64, chroma, 0.0) {
        0.0
    } else if max_c == r {
        ((g - b) / chroma).rem_euclid(6.0) * 60.0
    } else if max_c == g {
        ((b - r) / chroma) * 60.0 + 120.0
    } else {
        ((r - g) / chroma) * 60.0 + 240.0
    };
    (hue.rem_euclid(360.0), max_c, min_c)
}

/// The inverse of [`hexagonal_hue`]: given a hue, a chroma and the amount to add to every channel,
/// rebuilds the unit-scale RGB triple.
pub(crate) fn hexagonal_rgb(hue: f64, chroma: f64, offset: f64) -> Rgb {
    let h = hue.rem_euclid(360.0);
    // the second-largest component, where chroma is the largest because the smallest is 0
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    // which line of the hexagon we're on, i.e., which are the two largest components
    let (r1, g1, b1) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    Rgb::from_unit(r1 + offset, g1 + offset, b1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagonal_hue_sectors() {
        let hue = |r, g, b| hexagonal_hue(Rgb { r, g, b }).0;
        assert_eq!(hue(255, 0, 0), 0.0);
        assert_eq!(hue(255, 255, 0), 60.0);
        assert_eq!(hue(0, 255, 0), 120.0);
        assert_eq!(hue(0, 255, 255), 180.0);
        assert_eq!(hue(0, 0, 255), 240.0);
        assert_eq!(hue(255, 0, 255), 300.0);
        // blue above green in the red sector lands just under 360, not negative
        assert!(hue(255, 0, 10) > 350.0);
        assert_eq!(hue(90, 90, 90), 0.0);
    }
}
