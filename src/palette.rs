//! Dominant colors of an image, for the palette-from-image tool. Decoding the image is the
//! caller's business: this works on a slice of sampled pixels.
//!
//! The method is popularity quantization. Pixels are bucketed by the top bits of each channel, the
//! most populated buckets win, and each bucket is represented by the mean of the pixels that fell
//! into it rather than by the corner of its cell. Representatives that look too close to a color
//! already picked are skipped, so one dominant hue split across two buckets doesn't fill the
//! palette twice.

use std::collections::HashMap;

use log::trace;
use serde_derive::{Deserialize, Serialize};

use crate::color::{Color, Rgb};
use crate::colors::CieLab;
use crate::coord::Coord;

/// Tunables for [`extract_palette`]. Missing fields take their default when deserialized.
///
/// ```
/// # use tincture::palette::PaletteOptions;
/// let options: PaletteOptions = serde_json::from_str(r#"{"count": 3}"#).unwrap();
/// assert_eq!(options.count, 3);
/// assert_eq!(options.quantize_bits, PaletteOptions::default().quantize_bits);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// The most colors to return.
    pub count: usize,
    /// Bits kept per channel when bucketing, from 1 to 8; values outside are clamped. Fewer bits
    /// means coarser buckets.
    pub quantize_bits: u8,
    /// Candidates no farther than this CIE76 distance from an already chosen color are skipped.
    pub min_distance: f64,
}

impl Default for PaletteOptions {
    fn default() -> PaletteOptions {
        PaletteOptions {
            count: 6,
            quantize_bits: 4,
            min_distance: 10.0,
        }
    }
}

/// The dominant colors of `pixels`, most common first, at most `options.count` of them.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::palette::{extract_palette, PaletteOptions};
/// let red = Rgb { r: 255, g: 0, b: 0 };
/// let blue = Rgb { r: 0, g: 0, b: 255 };
/// let pixels = vec![blue, red, red, blue, red];
/// assert_eq!(extract_palette(&pixels, &PaletteOptions::default()), vec![red, blue]);
/// ```
pub fn extract_palette(pixels: &[Rgb], options: &PaletteOptions) -> Vec<Rgb> {
    let shift = 8 - num::clamp(options.quantize_bits, 1, 8);
    // buckets in order of first appearance, so the stable sort below breaks ties by it
    let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();
    let mut buckets: Vec<Vec<Coord>> = Vec::new();
    for pixel in pixels {
        let key = (pixel.r >> shift, pixel.g >> shift, pixel.b >> shift);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(Coord::from(*pixel));
    }
    trace!(
        "{} pixels fell into {} buckets at {} bits",
        pixels.len(),
        buckets.len(),
        8 - shift
    );
    buckets.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut chosen: Vec<(Rgb, CieLab)> = Vec::with_capacity(options.count);
    for members in &buckets {
        if chosen.len() >= options.count {
            break;
        }
        let mean = match Coord::average(members) {
            Some(mean) => Rgb::from(mean),
            None => continue,
        };
        let lab = CieLab::from_rgb(mean);
        if chosen
            .iter()
            .any(|(_, other)| lab.delta_e(other) <= options.min_distance)
        {
            trace!("skipping {} ({} pixels): too close to a chosen color", mean, members.len());
            continue;
        }
        chosen.push((mean, lab));
    }
    chosen.into_iter().map(|(rgb, _)| rgb).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(color: (u8, u8, u8), n: usize) -> Vec<Rgb> {
        vec![Rgb::from(color); n]
    }

    #[test]
    fn test_empty() {
        assert!(extract_palette(&[], &PaletteOptions::default()).is_empty());
        let none = PaletteOptions {
            count: 0,
            ..PaletteOptions::default()
        };
        assert!(extract_palette(&repeat((1, 2, 3), 4), &none).is_empty());
    }

    #[test]
    fn test_popularity_order() {
        let mut pixels = repeat((0, 0, 255), 2);
        pixels.extend(repeat((0, 200, 0), 5));
        pixels.extend(repeat((255, 255, 255), 3));
        let palette = extract_palette(&pixels, &PaletteOptions::default());
        assert_eq!(
            palette,
            vec![
                Rgb::from((0, 200, 0)),
                Rgb::from((255, 255, 255)),
                Rgb::from((0, 0, 255))
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let mut pixels = repeat((255, 255, 0), 2);
        pixels.extend(repeat((0, 0, 0), 2));
        let palette = extract_palette(&pixels, &PaletteOptions::default());
        assert_eq!(palette, vec![Rgb::from((255, 255, 0)), Rgb::BLACK]);
    }

    #[test]
    fn test_bucket_mean() {
        // both land in the same 4-bit cell
        let pixels = vec![Rgb::from((250, 0, 0)), Rgb::from((254, 0, 0))];
        let palette = extract_palette(&pixels, &PaletteOptions::default());
        assert_eq!(palette, vec![Rgb::from((252, 0, 0))]);
    }

    #[test]
    fn test_near_duplicates_are_skipped() {
        // adjacent cells, nearly the same color
        let mut pixels = repeat((127, 0, 0), 3);
        pixels.extend(repeat((128, 0, 0), 2));
        pixels.extend(repeat((0, 0, 128), 1));
        let options = PaletteOptions::default();
        assert_eq!(
            extract_palette(&pixels, &options),
            vec![Rgb::from((127, 0, 0)), Rgb::from((0, 0, 128))]
        );
        let keep_all = PaletteOptions {
            min_distance: -1.0,
            ..options
        };
        assert_eq!(extract_palette(&pixels, &keep_all).len(), 3);
    }

    #[test]
    fn test_count_and_bits() {
        let pixels: Vec<Rgb> = (0..=255u8).map(|v| Rgb { r: v, g: 0, b: 255 - v }).collect();
        let options = PaletteOptions {
            count: 4,
            quantize_bits: 0,
            min_distance: 0.0,
        };
        // clamped to one bit: the ramp splits into two cells
        let palette = extract_palette(&pixels, &options);
        assert_eq!(palette.len(), 2);
        let fine = PaletteOptions {
            quantize_bits: 8,
            ..options
        };
        assert_eq!(extract_palette(&pixels, &fine).len(), 4);
    }
}
