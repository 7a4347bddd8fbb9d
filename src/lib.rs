//! Tincture is the color math behind a color reference site and its tools: a page for every hex
//! code, a harmony wheel, a contrast checker, a color blindness simulator and a palette extractor.
//! Everything is built around one pivot type, [`Rgb`](color/struct.Rgb.html), which every other
//! color space converts to and from, and around hex codes, the way colors are named on the web.
//!
//! All of it is pure computation: no I/O, no global mutable state, and no panics on any input.
//! The only shared data is the named-color catalog, parsed once on first use.
//!
//! ```
//! use tincture::prelude::*;
//! use tincture::colors::Hsl;
//!
//! let orange = Rgb::from_hex_code("#ff5733").unwrap();
//! let hsl: Hsl = orange.convert();
//! assert_eq!(hsl.to_string(), "hsl(11, 100%, 60%)");
//! assert_eq!(contrast_color(orange).to_string(), "#000000");
//! let pair = color_harmony(orange, HarmonyScheme::Complementary);
//! assert_eq!(pair[0], orange);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

pub mod catalog;
pub mod color;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
mod csscolor;
mod cssnumeric;
pub mod family;
pub mod harmony;
pub mod hex;
pub mod illuminants;
pub mod palette;
pub mod prelude;
pub mod variation;
pub mod vision;
