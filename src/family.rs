//! Coarse, human-facing classification of colors: which family of hues a color belongs to, whether
//! it reads as dark or light, and guessing a color from the title of an article about it.
//!
//! Classification works on the rounded HSL values, the same numbers a color page prints, so the
//! category shown next to `hsl(14, 100%, 60%)` never contradicts it.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::color::{Color, Rgb};
use crate::colors::Hsl;
use crate::hex::Hex;

/// A named slice of the hue wheel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HueFamily {
    /// Hues below 15° and from 330° up.
    Red,
    /// 15° to 45°.
    RedOrange,
    /// 45° to 75°.
    Orange,
    /// 75° to 105°.
    Yellow,
    /// 105° to 150°.
    Green,
    /// 150° to 195°.
    Cyan,
    /// 195° to 240°.
    Blue,
    /// 240° to 270°.
    BlueViolet,
    /// 270° to 300°.
    Violet,
    /// 300° to 330°.
    Magenta,
}

/// Upper bounds of each family, exclusive, in degrees.
const HUE_FAMILIES: [(f64, HueFamily); 11] = [
    (15.0, HueFamily::Red),
    (45.0, HueFamily::RedOrange),
    (75.0, HueFamily::Orange),
    (105.0, HueFamily::Yellow),
    (150.0, HueFamily::Green),
    (195.0, HueFamily::Cyan),
    (240.0, HueFamily::Blue),
    (270.0, HueFamily::BlueViolet),
    (300.0, HueFamily::Violet),
    (330.0, HueFamily::Magenta),
    (360.0, HueFamily::Red),
];

impl HueFamily {
    /// The family of a hue in degrees. Any hue is accepted and wrapped onto the wheel first.
    ///
    /// ```
    /// # use tincture::family::HueFamily;
    /// assert_eq!(HueFamily::from_hue(11.0), HueFamily::Red);
    /// assert_eq!(HueFamily::from_hue(345.0), HueFamily::Red);
    /// assert_eq!(HueFamily::from_hue(-120.0), HueFamily::BlueViolet);
    /// ```
    pub fn from_hue(hue: f64) -> HueFamily {
        let wrapped = hue.rem_euclid(360.0);
        HUE_FAMILIES
            .iter()
            .find(|(upper, _)| wrapped < *upper)
            .map_or(HueFamily::Red, |(_, family)| *family)
    }

    /// The display name, e.g. `"Red-Orange"`.
    pub fn name(self) -> &'static str {
        match self {
            HueFamily::Red => "Red",
            HueFamily::RedOrange => "Red-Orange",
            HueFamily::Orange => "Orange",
            HueFamily::Yellow => "Yellow",
            HueFamily::Green => "Green",
            HueFamily::Cyan => "Cyan",
            HueFamily::Blue => "Blue",
            HueFamily::BlueViolet => "Blue-Violet",
            HueFamily::Violet => "Violet",
            HueFamily::Magenta => "Magenta",
        }
    }

    /// The associations color pages list for this family.
    pub fn traits(self) -> &'static str {
        match self {
            HueFamily::Red => "passion, energy, urgency",
            HueFamily::RedOrange => "warmth, creativity, enthusiasm, approachability",
            HueFamily::Orange => "vitality, friendliness, optimism",
            HueFamily::Yellow => "happiness, clarity, intellect",
            HueFamily::Green => "growth, balance, renewal",
            HueFamily::Cyan => "calm, clarity, technology",
            HueFamily::Blue => "trust, stability, professionalism",
            HueFamily::BlueViolet => "imagination, sophistication, depth",
            HueFamily::Violet => "mystery, creativity, luxury",
            HueFamily::Magenta => "innovation, vibrancy, expression",
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How light a color reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// HSL lightness below 30%.
    Dark,
    /// HSL lightness from 30% to 70%.
    Medium,
    /// HSL lightness above 70%.
    Light,
}

impl Tone {
    /// The tone of an HSL lightness percentage.
    pub fn from_lightness(lightness: u8) -> Tone {
        if lightness < 30 {
            Tone::Dark
        } else if lightness > 70 {
            Tone::Light
        } else {
            Tone::Medium
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Tone::Dark => "Dark",
            Tone::Medium => "Medium",
            Tone::Light => "Light",
        })
    }
}

/// The hue family and tone of a color. Grays have no hue and fall in with the reds at 0°.
pub fn classify(rgb: Rgb) -> (HueFamily, Tone) {
    let (h, _, l) = Hsl::from_rgb(rgb).rounded();
    (HueFamily::from_hue(f64::from(h)), Tone::from_lightness(l))
}

/// The `"{tone} {family}"` label of a color page.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::family::category_name;
/// assert_eq!(category_name(Rgb { r: 255, g: 87, b: 51 }), "Medium Red");
/// assert_eq!(category_name(Rgb { r: 51, g: 102, b: 153 }), "Medium Blue");
/// ```
pub fn category_name(rgb: Rgb) -> String {
    let (family, tone) = classify(rgb);
    format!("{} {}", tone, family)
}

lazy_static! {
    static ref TITLE_HEX: Regex =
        Regex::new(r"#([0-9a-fA-F]{6})").expect("title hex pattern is valid");
}

/// Keywords checked against titles, in priority order.
const TITLE_KEYWORDS: [(&str, [u8; 3]); 14] = [
    ("green", [0x00, 0x80, 0x00]),
    ("red", [0xFF, 0x00, 0x00]),
    ("blue", [0x00, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xD7, 0x00]),
    ("orange", [0xFF, 0x8C, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("violet", [0x8F, 0x00, 0xFF]),
    ("cyan", [0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF]),
    ("pink", [0xFF, 0x69, 0xB4]),
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("gray", [0x80, 0x80, 0x80]),
    ("brown", [0x8B, 0x45, 0x13]),
];

/// Guesses the color an article is about from its title: the first `#RRGGBB` code in it if there
/// is one, otherwise the first color keyword found anywhere in the title (case-insensitively, and
/// inside other words too, so "Reddit" counts as red). Keywords are tried in a fixed order, green
/// first, so a title mentioning both green and red is green.
///
/// ```
/// # use tincture::family::detect_color_from_title;
/// assert_eq!(detect_color_from_title("Why #ff5733 works").unwrap().to_string(), "#FF5733");
/// assert_eq!(detect_color_from_title("Red and Green").unwrap().to_string(), "#008000");
/// assert_eq!(detect_color_from_title("Ten tips"), None);
/// ```
pub fn detect_color_from_title(title: &str) -> Option<Hex> {
    if let Some(code) = TITLE_HEX.captures(title).and_then(|c| c.get(1)) {
        return Hex::parse(code.as_str()).ok();
    }
    let lower = title.to_lowercase();
    TITLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, [r, g, b])| Rgb { r: *r, g: *g, b: *b }.to_hex())
}
