//! The catalog of named colors, and the lookups built on it: related colors for a color page,
//! the nearest named color, and whether a hex code is one of the known names.
//!
//! The catalog is the 148 CSS named colors, shipped as CSV inside the crate and parsed once on
//! first use. Several names share a hex code (`aqua` and `cyan`, `gray` and `grey`); lookups by
//! hex report the first name in catalog order, and related colors list each hex only once.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::color::{Color, ColorParseError, Rgb};
use crate::colors::CieLab;
use crate::hex::Hex;

/// An entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// The CSS keyword, in lowercase.
    pub name: String,
    /// The color the keyword names.
    pub hex: Hex,
}

struct Catalog {
    entries: Vec<NamedColor>,
    // CIELAB coordinates of each entry, in the same order
    labs: Vec<CieLab>,
}

const CSS_COLORS: &str = include_str!("../data/css-colors.csv");

fn read_catalog(data: &str) -> Result<Catalog, csv::Error> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let entries = reader
        .deserialize()
        .collect::<Result<Vec<NamedColor>, csv::Error>>()?;
    let labs = entries
        .iter()
        .map(|entry| CieLab::from_rgb(entry.hex.to_rgb()))
        .collect();
    debug!("parsed {} named colors", entries.len());
    Ok(Catalog { entries, labs })
}

lazy_static! {
    // bad data here is our bug, not the caller's
    static ref CATALOG: Catalog =
        read_catalog(CSS_COLORS).expect("embedded color catalog is well-formed");
}

/// Every named color, in catalog order.
pub fn catalog() -> &'static [NamedColor] {
    &CATALOG.entries
}

/// Catalog entries paired with their CIE76 distance from `lab`, in catalog order.
fn distances(lab: CieLab) -> impl Iterator<Item = (&'static NamedColor, f64)> {
    CATALOG
        .entries
        .iter()
        .zip(CATALOG.labs.iter())
        .map(move |(entry, other)| (entry, lab.delta_e(other)))
}

/// The `n` catalog colors perceptually closest to `rgb`, closest first. Distance is CIE76 in
/// CIELAB; equally distant colors keep catalog order. A catalog color identical to `rgb` is left
/// out, and so is every repeat of a hex code already listed.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::catalog::related_colors;
/// let near_red = related_colors(Rgb { r: 250, g: 5, b: 5 }, 3);
/// assert_eq!(near_red[0].to_string(), "#FF0000");
/// ```
pub fn related_colors(rgb: Rgb, n: usize) -> Vec<Hex> {
    let own = rgb.to_hex();
    let mut ranked: Vec<_> = distances(CieLab::from_rgb(rgb))
        .filter(|(entry, _)| entry.hex != own)
        .collect();
    // stable, so ties stay in catalog order
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .map(|(entry, _)| entry.hex)
        .filter(|hex| seen.insert(*hex))
        .take(n)
        .collect()
}

/// [`related_colors`] of a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn get_related_colors(hex: &str, n: usize) -> Result<Vec<Hex>, ColorParseError> {
    Rgb::from_hex_code(hex).map(|rgb| related_colors(rgb, n))
}

/// The named color closest to `rgb`, which is its own name if it has one. Only `None` if the
/// catalog is empty.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::catalog::nearest_named_color;
/// let nearest = nearest_named_color(Rgb { r: 255, g: 100, b: 70 }).unwrap();
/// assert_eq!(nearest.name, "tomato");
/// ```
pub fn nearest_named_color(rgb: Rgb) -> Option<&'static NamedColor> {
    distances(CieLab::from_rgb(rgb))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entry, _)| entry)
}

/// The name of a hex code, if it names a catalog color. Invalid hex codes have no name.
pub fn lookup_name(hex: &str) -> Option<&'static str> {
    let hex = Hex::parse(hex).ok()?;
    CATALOG
        .entries
        .iter()
        .find(|entry| entry.hex == hex)
        .map(|entry| entry.name.as_str())
}

/// Returns `true` if the hex code is valid and names a catalog color.
pub fn is_known_color(hex: &str) -> bool {
    lookup_name(hex).is_some()
}
