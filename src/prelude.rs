//! This module simply brings the most common Tincture functionality under a single namespace, to
//! prevent excessive imports. It includes the [`Color`] trait, the ubiquitous [`Rgb`] and [`Hex`]
//! types with their parse error, the [`Illuminant`], the scheme and deficiency enums, and the
//! per-color operations a color page needs. The alternative color spaces in [`colors`] are not
//! included.
//!
//! [`colors`]: ../colors/index.html

pub use crate::catalog::{nearest_named_color, related_colors, NamedColor};
pub use crate::color::{Color, ColorParseError, Rgb};
pub use crate::contrast::{contrast_color, contrast_ratio, relative_luminance, WcagCompliance};
pub use crate::coord::Coord;
pub use crate::family::{category_name, HueFamily, Tone};
pub use crate::harmony::{color_harmony, HarmonyScheme};
pub use crate::hex::Hex;
pub use crate::illuminants::Illuminant;
pub use crate::variation::{shades, tints, tones};
pub use crate::vision::{simulate, VisionDeficiency};
