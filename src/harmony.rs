//! Color harmonies: sets of colors picked by rotating the hue of a base color around the HSL wheel,
//! keeping saturation and lightness fixed. The monochromatic scheme is the odd one out and walks
//! lightness instead of hue.
//!
//! Every scheme puts the input color first, so a UI can always render the base swatch from index 0.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::color::{Color, ColorParseError, Rgb};
use crate::colors::Hsl;
use crate::hex::Hex;

/// Lightness steps of the monochromatic scheme, in percentage points.
const MONOCHROMATIC_LIGHTNESS: [f64; 5] = [0.0, -30.0, -15.0, 15.0, 30.0];

/// One of the named harmony schemes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    /// The base and its two neighbors 30° away.
    Analogous,
    /// The base and the hue opposite it.
    Complementary,
    /// The base and the two hues either side of its complement.
    SplitComplementary,
    /// Three hues evenly spaced.
    Triadic,
    /// Two complementary pairs, 60° apart.
    Tetradic,
    /// Four hues evenly spaced.
    Square,
    /// Two adjacent hues and their complements.
    DoubleSplitComplementary,
    /// One hue at several lightnesses.
    Monochromatic,
}

impl HarmonyScheme {
    /// Every scheme, in the order the harmony page lists them.
    pub const ALL: [HarmonyScheme; 8] = [
        HarmonyScheme::Analogous,
        HarmonyScheme::Complementary,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Triadic,
        HarmonyScheme::Tetradic,
        HarmonyScheme::Square,
        HarmonyScheme::DoubleSplitComplementary,
        HarmonyScheme::Monochromatic,
    ];

    /// The kebab-case name of the scheme, as used in URLs.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::Square => "square",
            HarmonyScheme::DoubleSplitComplementary => "double-split-complementary",
            HarmonyScheme::Monochromatic => "monochromatic",
        }
    }

    /// The hue rotations in degrees, starting with 0 for the base color. Empty for the
    /// monochromatic scheme, which doesn't rotate.
    pub fn hue_offsets(self) -> &'static [f64] {
        match self {
            HarmonyScheme::Analogous => &[0.0, -30.0, 30.0],
            HarmonyScheme::Complementary => &[0.0, 180.0],
            HarmonyScheme::SplitComplementary => &[0.0, 150.0, 210.0],
            HarmonyScheme::Triadic => &[0.0, 120.0, 240.0],
            HarmonyScheme::Tetradic => &[0.0, 60.0, 180.0, 240.0],
            HarmonyScheme::Square => &[0.0, 90.0, 180.0, 270.0],
            HarmonyScheme::DoubleSplitComplementary => &[0.0, 30.0, 180.0, 210.0],
            HarmonyScheme::Monochromatic => &[],
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = ColorParseError;

    /// Parses a kebab-case scheme name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<HarmonyScheme, ColorParseError> {
        let wanted = s.trim().to_ascii_lowercase();
        HarmonyScheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| ColorParseError::UnknownScheme(s.to_owned()))
    }
}

/// The colors of a harmony scheme built on `base`. The first color is always `base` itself.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::harmony::{color_harmony, HarmonyScheme};
/// let blue = Rgb { r: 0, g: 0, b: 255 };
/// let pair = color_harmony(blue, HarmonyScheme::Complementary);
/// assert_eq!(pair, vec![blue, Rgb { r: 255, g: 255, b: 0 }]);
/// ```
pub fn color_harmony(base: Rgb, scheme: HarmonyScheme) -> Vec<Rgb> {
    let hsl = Hsl::from_rgb(base);
    let mut colors = vec![base];
    if scheme == HarmonyScheme::Monochromatic {
        colors.extend(MONOCHROMATIC_LIGHTNESS[1..].iter().map(|offset| {
            Hsl {
                l: num::clamp(hsl.l + offset, 0.0, 100.0),
                ..hsl
            }
            .to_rgb()
        }));
    } else {
        colors.extend(
            scheme.hue_offsets()[1..]
                .iter()
                .map(|offset| hsl.rotate_hue(*offset).to_rgb()),
        );
    }
    colors
}

/// [`color_harmony`] on a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn get_color_harmony(hex: &str, scheme: HarmonyScheme) -> Result<Vec<Hex>, ColorParseError> {
    let base = Rgb::from_hex_code(hex)?;
    Ok(color_harmony(base, scheme)
        .into_iter()
        .map(Hex::from)
        .collect())
}
