//! Tints, shades and tones: ramps that walk a color toward white, black and gray.
//!
//! Each ramp of `n` steps uses the factors `i / n` for `i` in `0..n`, so the first step is the
//! input color and the pure endpoint is never reached: a ramp of white tints doesn't end in a
//! swatch indistinguishable from the page background.

use crate::color::{Color, ColorParseError, Rgb};
use crate::colors::Hsl;
use crate::hex::Hex;

/// The factors `0, 1/n, ..., (n-1)/n`.
fn steps(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| i as f64 / n as f64)
}

/// `n` tints of `base`, blending toward white in sRGB.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::variation::tints;
/// let ramp: Vec<String> = tints(Rgb::BLACK, 3).iter().map(Rgb::to_string).collect();
/// assert_eq!(ramp, vec!["#000000", "#555555", "#AAAAAA"]);
/// ```
pub fn tints(base: Rgb, n: usize) -> Vec<Rgb> {
    steps(n).map(|t| base.blend(Rgb::WHITE, t)).collect()
}

/// `n` shades of `base`, blending toward black in sRGB.
pub fn shades(base: Rgb, n: usize) -> Vec<Rgb> {
    steps(n).map(|t| base.blend(Rgb::BLACK, t)).collect()
}

/// `n` tones of `base`: the HSL saturation is scaled down toward 0 while hue and lightness are
/// kept, which moves the color toward the gray of the same lightness.
pub fn tones(base: Rgb, n: usize) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    steps(n)
        .map(|t| {
            if t == 0.0 {
                // skip the HSL round trip so the first step is exactly the input
                base
            } else {
                Hsl {
                    s: hsl.s * (1.0 - t),
                    ..hsl
                }
                .to_rgb()
            }
        })
        .collect()
}

type Ramp = fn(Rgb, usize) -> Vec<Rgb>;

fn hex_ramp(hex: &str, n: usize, ramp: Ramp) -> Result<Vec<Hex>, ColorParseError> {
    let base = Rgb::from_hex_code(hex)?;
    Ok(ramp(base, n).into_iter().map(Hex::from).collect())
}

/// [`tints`] of a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn generate_tints(hex: &str, n: usize) -> Result<Vec<Hex>, ColorParseError> {
    hex_ramp(hex, n, tints)
}

/// [`shades`] of a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn generate_shades(hex: &str, n: usize) -> Result<Vec<Hex>, ColorParseError> {
    hex_ramp(hex, n, shades)
}

/// [`tones`] of a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn generate_tones(hex: &str, n: usize) -> Result<Vec<Hex>, ColorParseError> {
    hex_ramp(hex, n, tones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;

    const SAMPLES: [Rgb; 4] = [
        Rgb { r: 255, g: 87, b: 51 },
        Rgb { r: 0, g: 0, b: 255 },
        Rgb { r: 18, g: 200, b: 97 },
        Rgb { r: 128, g: 128, b: 128 },
    ];

    #[test]
    fn test_first_step_is_input() {
        for base in &SAMPLES {
            let ramps: [Ramp; 3] = [tints, shades, tones];
            for ramp in &ramps {
                let colors = ramp(*base, 10);
                assert_eq!(colors.len(), 10);
                assert_eq!(colors[0], *base);
            }
        }
    }

    #[test]
    fn test_empty_ramp() {
        assert!(tints(Rgb::BLACK, 0).is_empty());
        assert!(shades(Rgb::WHITE, 0).is_empty());
        assert!(generate_tones("#abc", 0).unwrap().is_empty());
    }

    #[test]
    fn test_black_tints_strictly_lighten() {
        let ramp = tints(Rgb::BLACK, 3);
        assert_eq!(ramp[0], Rgb::BLACK);
        assert!(ramp
            .windows(2)
            .all(|w| relative_luminance(w[0]) < relative_luminance(w[1])));
    }

    #[test]
    fn test_black_and_white_ramps_of_ten() {
        let luminances = |ramp: Vec<Hex>| -> Vec<f64> {
            ramp.into_iter().map(|hex| relative_luminance(hex.to_rgb())).collect()
        };
        let lighter = luminances(generate_tints("#000000", 10).unwrap());
        assert_eq!(lighter.len(), 10);
        assert_eq!(lighter[0], 0.0);
        assert!(lighter.windows(2).all(|w| w[0] <= w[1]));
        let darker = luminances(generate_shades("#FFFFFF", 10).unwrap());
        assert_eq!(darker.len(), 10);
        assert!(darker.windows(2).all(|w| w[0] >= w[1]));
        assert!(darker[9] < darker[0]);
    }

    #[test]
    fn test_monotonic() {
        for base in &SAMPLES {
            let lighter = tints(*base, 8);
            assert!(lighter
                .windows(2)
                .all(|w| relative_luminance(w[0]) <= relative_luminance(w[1])));
            let darker = shades(*base, 8);
            assert!(darker
                .windows(2)
                .all(|w| relative_luminance(w[0]) >= relative_luminance(w[1])));
            let duller = tones(*base, 8);
            let saturation = |c: &Rgb| Hsl::from_rgb(*c).s;
            assert!(duller
                .windows(2)
                .all(|w| saturation(&w[0]) + 1.0 >= saturation(&w[1])));
            assert!(saturation(&duller[7]) < saturation(&duller[0]) || base.is_gray());
        }
    }

    #[test]
    fn test_endpoint_is_not_reached() {
        let ramp = generate_shades("#FFFFFF", 4).unwrap();
        let last = ramp.last().unwrap();
        assert_eq!(last.to_string(), "#404040");
        assert!(generate_tints("white", 4).is_err());
    }
}
