//! Color vision deficiency simulation. Each deficiency is a fixed 3×3 matrix applied directly to
//! the sRGB channels, the same matrix set the widely used Coblis simulator popularized. It is a
//! rough model, not a physiological one, but it is what readers of a color reference expect to
//! see and it is cheap enough to run per swatch.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};
use serde_derive::{Deserialize, Serialize};

use crate::color::{ColorParseError, Rgb};
use crate::consts;
use crate::hex::Hex;

/// A type of color vision deficiency. The `-opia` variants are the dichromacies, where one cone
/// type is missing; the `-anomaly` variants are the milder trichromacies, where it is shifted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisionDeficiency {
    /// No red cones.
    Protanopia,
    /// Weak red cones.
    Protanomaly,
    /// No green cones.
    Deuteranopia,
    /// Weak green cones.
    Deuteranomaly,
    /// No blue cones.
    Tritanopia,
    /// Weak blue cones.
    Tritanomaly,
    /// No color vision at all.
    Achromatopsia,
    /// Strongly reduced color vision.
    Achromatomaly,
}

impl VisionDeficiency {
    /// Every deficiency, in the order the simulator lists them.
    pub const ALL: [VisionDeficiency; 8] = [
        VisionDeficiency::Protanopia,
        VisionDeficiency::Protanomaly,
        VisionDeficiency::Deuteranopia,
        VisionDeficiency::Deuteranomaly,
        VisionDeficiency::Tritanopia,
        VisionDeficiency::Tritanomaly,
        VisionDeficiency::Achromatopsia,
        VisionDeficiency::Achromatomaly,
    ];

    /// The lowercase name of the deficiency.
    pub fn name(self) -> &'static str {
        match self {
            VisionDeficiency::Protanopia => "protanopia",
            VisionDeficiency::Protanomaly => "protanomaly",
            VisionDeficiency::Deuteranopia => "deuteranopia",
            VisionDeficiency::Deuteranomaly => "deuteranomaly",
            VisionDeficiency::Tritanopia => "tritanopia",
            VisionDeficiency::Tritanomaly => "tritanomaly",
            VisionDeficiency::Achromatopsia => "achromatopsia",
            VisionDeficiency::Achromatomaly => "achromatomaly",
        }
    }

    /// The complete form of this deficiency: the `-opia` variant it is a weaker version of, or
    /// itself.
    pub fn complete(self) -> VisionDeficiency {
        match self {
            VisionDeficiency::Protanopia | VisionDeficiency::Protanomaly => {
                VisionDeficiency::Protanopia
            }
            VisionDeficiency::Deuteranopia | VisionDeficiency::Deuteranomaly => {
                VisionDeficiency::Deuteranopia
            }
            VisionDeficiency::Tritanopia | VisionDeficiency::Tritanomaly => {
                VisionDeficiency::Tritanopia
            }
            VisionDeficiency::Achromatopsia | VisionDeficiency::Achromatomaly => {
                VisionDeficiency::Achromatopsia
            }
        }
    }

    fn matrix(self) -> Matrix3<f64> {
        match self {
            VisionDeficiency::Protanopia => consts::PROTANOPIA_MAT(),
            VisionDeficiency::Protanomaly => consts::PROTANOMALY_MAT(),
            VisionDeficiency::Deuteranopia => consts::DEUTERANOPIA_MAT(),
            VisionDeficiency::Deuteranomaly => consts::DEUTERANOMALY_MAT(),
            VisionDeficiency::Tritanopia => consts::TRITANOPIA_MAT(),
            VisionDeficiency::Tritanomaly => consts::TRITANOMALY_MAT(),
            VisionDeficiency::Achromatopsia => consts::ACHROMATOPSIA_MAT(),
            VisionDeficiency::Achromatomaly => consts::ACHROMATOMALY_MAT(),
        }
    }
}

impl fmt::Display for VisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionDeficiency {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<VisionDeficiency, ColorParseError> {
        let wanted = s.trim().to_ascii_lowercase();
        VisionDeficiency::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ColorParseError::UnknownDeficiency(s.to_owned()))
    }
}

fn apply(matrix: Matrix3<f64>, rgb: Rgb) -> Rgb {
    let (r, g, b) = rgb.to_unit();
    let out = matrix * Vector3::new(r, g, b);
    Rgb::from_unit(out[0], out[1], out[2])
}

/// How `rgb` appears to someone with the given deficiency.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::vision::{simulate, VisionDeficiency};
/// let red = Rgb { r: 255, g: 0, b: 0 };
/// assert_eq!(simulate(red, VisionDeficiency::Achromatopsia).to_string(), "#4C4C4C");
/// ```
pub fn simulate(rgb: Rgb, deficiency: VisionDeficiency) -> Rgb {
    apply(deficiency.matrix(), rgb)
}

/// [`simulate`] on a hex code.
///
/// # Errors
/// Returns [`ColorParseError::InvalidColorFormat`] if the input is not an accepted hex code.
pub fn simulate_color_blindness(
    hex: &str,
    deficiency: VisionDeficiency,
) -> Result<Hex, ColorParseError> {
    Rgb::from_hex_code(hex).map(|rgb| simulate(rgb, deficiency).to_hex())
}

/// Simulates a deficiency at partial strength: `severity` 0 is normal vision and 1 is the complete
/// form of the deficiency (see [`VisionDeficiency::complete`]), with the matrices interpolated in
/// between. `severity` is clamped to [0, 1].
pub fn simulate_with_severity(rgb: Rgb, deficiency: VisionDeficiency, severity: f64) -> Rgb {
    let severity = num::clamp(severity, 0.0, 1.0);
    let identity = Matrix3::<f64>::identity();
    let full = deficiency.complete().matrix();
    apply(identity + (full - identity) * severity, rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grays_are_preserved() {
        for v in (0..=255u8).step_by(5) {
            let gray = Rgb { r: v, g: v, b: v };
            for kind in &VisionDeficiency::ALL {
                assert_eq!(simulate(gray, *kind), gray, "{} on {}", kind, gray);
            }
        }
        assert_eq!(
            simulate_color_blindness("#808080", VisionDeficiency::Deuteranopia)
                .unwrap()
                .to_string(),
            "#808080"
        );
    }

    #[test]
    fn test_known_values() {
        let red = Rgb { r: 255, g: 0, b: 0 };
        assert_eq!(
            simulate(red, VisionDeficiency::Protanopia),
            Rgb { r: 145, g: 142, b: 0 }
        );
        // the anomaly keeps more of the red
        assert!(simulate(red, VisionDeficiency::Protanomaly).r > 145);
    }

    #[test]
    fn test_severity_endpoints() {
        let color = Rgb { r: 255, g: 87, b: 51 };
        for kind in &VisionDeficiency::ALL {
            assert_eq!(simulate_with_severity(color, *kind, 0.0), color);
            assert_eq!(simulate_with_severity(color, *kind, -3.0), color);
            assert_eq!(
                simulate_with_severity(color, *kind, 1.0),
                simulate(color, kind.complete())
            );
            assert_eq!(
                simulate_with_severity(color, *kind, 12.0),
                simulate(color, kind.complete())
            );
        }
    }

    #[test]
    fn test_names() {
        for kind in &VisionDeficiency::ALL {
            assert_eq!(kind.name().parse::<VisionDeficiency>(), Ok(*kind));
            assert_eq!(
                serde_json::to_string(kind).unwrap(),
                format!("\"{}\"", kind)
            );
        }
        assert_eq!("  TRITANOPIA".parse::<VisionDeficiency>(), Ok(VisionDeficiency::Tritanopia));
        assert_eq!(
            "colorblind".parse::<VisionDeficiency>(),
            Err(ColorParseError::UnknownDeficiency("colorblind".to_owned()))
        );
        assert!(simulate_color_blindness("#GGGGGG", VisionDeficiency::Protanopia).is_err());
    }
}
