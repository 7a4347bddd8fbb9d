//! Luminance and legibility. There are two different questions answered here, with two different
//! formulas, and they are kept apart on purpose:
//!
//! - *Which of black or white should label this swatch?* [`contrast_color`] answers with the
//!   perceived brightness formula from the W3C's older accessibility notes, cut at 128. It is the
//!   one canonical text-color rule of the crate.
//! - *Does this text/background pair meet WCAG?* [`contrast_ratio`] computes the WCAG 2 ratio from
//!   relative luminance, and [`WcagCompliance`] grades it.
//!
//! The two can disagree near the threshold: for a mid orange the brightness rule picks black while
//! the WCAG ratio would be slightly higher against white.

use serde_derive::{Deserialize, Serialize};

use crate::color::{srgb_to_linear, ColorParseError, Rgb};
use crate::hex::Hex;

/// Perceived brightness above this picks black text; exactly this still picks white.
pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// WCAG relative luminance: the gamma-decoded channels weighted by (0.2126, 0.7152, 0.0722).
/// Ranges from 0 for black to 1 for white.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// The WCAG 2 contrast ratio `(L1 + 0.05) / (L2 + 0.05)`, with L1 the lighter of the two. Symmetric
/// in its arguments, and always between 1 and 21.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::contrast::contrast_ratio;
/// assert_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0);
/// let gray = Rgb { r: 0x76, g: 0x76, b: 0x76 };
/// assert!((contrast_ratio(gray, Rgb::WHITE) - 4.54).abs() < 0.01);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    num::clamp((lighter + 0.05) / (darker + 0.05), 1.0, 21.0)
}

/// [`contrast_ratio`] of two hex codes.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if either input is not an accepted hex code.
pub fn get_contrast_ratio(foreground: &str, background: &str) -> Result<f64, ColorParseError> {
    Ok(contrast_ratio(
        Rgb::from_hex_code(foreground)?,
        Rgb::from_hex_code(background)?,
    ))
}

/// Perceived brightness, `(299 R + 587 G + 114 B) / 1000`, on the 0-255 scale.
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    (299.0 * f64::from(rgb.r) + 587.0 * f64::from(rgb.g) + 114.0 * f64::from(rgb.b)) / 1000.0
}

/// Black or white, whichever reads better on top of `background`: black when its perceived
/// brightness is strictly above [`BRIGHTNESS_THRESHOLD`], white otherwise.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::contrast::contrast_color;
/// assert_eq!(contrast_color(Rgb { r: 255, g: 87, b: 51 }), Rgb::BLACK);
/// assert_eq!(contrast_color(Rgb { r: 0, g: 0, b: 128 }), Rgb::WHITE);
/// ```
pub fn contrast_color(background: Rgb) -> Rgb {
    if perceived_brightness(background) > BRIGHTNESS_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// [`contrast_color`] of a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn get_contrast_color(background: &str) -> Result<Hex, ColorParseError> {
    Rgb::from_hex_code(background).map(|rgb| contrast_color(rgb).to_hex())
}

/// The two WCAG conformance levels that define contrast requirements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level AA.
    Aa,
    /// Level AAA.
    Aaa,
}

/// What is being drawn on the background.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastTarget {
    /// Body text.
    NormalText,
    /// Text at least 18pt, or 14pt bold.
    LargeText,
    /// Icons, input borders and other graphical objects.
    UiComponent,
}

impl ContrastTarget {
    /// The minimum ratio for this target at a level, or `None` if WCAG sets no requirement, as for
    /// UI components at AAA.
    pub fn minimum_ratio(self, level: WcagLevel) -> Option<f64> {
        match (level, self) {
            (WcagLevel::Aa, ContrastTarget::NormalText) => Some(4.5),
            (WcagLevel::Aa, ContrastTarget::LargeText) => Some(3.0),
            (WcagLevel::Aa, ContrastTarget::UiComponent) => Some(4.5),
            (WcagLevel::Aaa, ContrastTarget::NormalText) => Some(7.0),
            (WcagLevel::Aaa, ContrastTarget::LargeText) => Some(4.5),
            (WcagLevel::Aaa, ContrastTarget::UiComponent) => None,
        }
    }
}

/// Pass or fail for every WCAG contrast requirement, as the contrast checker displays it.
///
/// ```
/// # use tincture::contrast::WcagCompliance;
/// let report = WcagCompliance::from_ratio(5.0);
/// assert!(report.aa_normal && report.aa_large && report.aa_ui);
/// assert!(!report.aaa_normal && report.aaa_large);
/// assert_eq!(report.aaa_ui, None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WcagCompliance {
    /// The ratio being graded.
    pub ratio: f64,
    /// AA, normal text (4.5:1).
    pub aa_normal: bool,
    /// AA, large text (3:1).
    pub aa_large: bool,
    /// AA, UI components (4.5:1).
    pub aa_ui: bool,
    /// AAA, normal text (7:1).
    pub aaa_normal: bool,
    /// AAA, large text (4.5:1).
    pub aaa_large: bool,
    /// AAA has no UI component requirement, so this is always `None`.
    pub aaa_ui: Option<bool>,
}

impl WcagCompliance {
    /// Grades a contrast ratio against every requirement.
    pub fn from_ratio(ratio: f64) -> WcagCompliance {
        let passes = |target: ContrastTarget, level: WcagLevel| {
            target.minimum_ratio(level).map(|minimum| ratio >= minimum)
        };
        WcagCompliance {
            ratio,
            aa_normal: passes(ContrastTarget::NormalText, WcagLevel::Aa).unwrap_or(true),
            aa_large: passes(ContrastTarget::LargeText, WcagLevel::Aa).unwrap_or(true),
            aa_ui: passes(ContrastTarget::UiComponent, WcagLevel::Aa).unwrap_or(true),
            aaa_normal: passes(ContrastTarget::NormalText, WcagLevel::Aaa).unwrap_or(true),
            aaa_large: passes(ContrastTarget::LargeText, WcagLevel::Aaa).unwrap_or(true),
            aaa_ui: passes(ContrastTarget::UiComponent, WcagLevel::Aaa),
        }
    }

    /// Looks up a single requirement; `None` where WCAG sets none.
    pub fn passes(&self, target: ContrastTarget, level: WcagLevel) -> Option<bool> {
        match (level, target) {
            (WcagLevel::Aa, ContrastTarget::NormalText) => Some(self.aa_normal),
            (WcagLevel::Aa, ContrastTarget::LargeText) => Some(self.aa_large),
            (WcagLevel::Aa, ContrastTarget::UiComponent) => Some(self.aa_ui),
            (WcagLevel::Aaa, ContrastTarget::NormalText) => Some(self.aaa_normal),
            (WcagLevel::Aaa, ContrastTarget::LargeText) => Some(self.aaa_large),
            (WcagLevel::Aaa, ContrastTarget::UiComponent) => self.aaa_ui,
        }
    }
}

/// Grades a foreground/background pair.
pub fn wcag_compliance(foreground: Rgb, background: Rgb) -> WcagCompliance {
    WcagCompliance::from_ratio(contrast_ratio(foreground, background))
}
