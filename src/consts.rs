//! This file provides the constant matrices used for color space conversion and for color vision
//! deficiency simulation. They are written out as functions returning `Matrix3` so the
//! coefficients read in the same row-major layout as the published tables.

use nalgebra::Matrix3;

/// Linear sRGB to CIE XYZ under D65, rows X, Y, Z.
#[allow(non_snake_case)]
pub fn SRGB_TO_XYZ_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124, 0.3576, 0.1805,
        0.2126, 0.7152, 0.0722,
        0.0193, 0.1192, 0.9505,
    )
}

/// CIE XYZ under D65 to linear sRGB, rows R, G, B.
#[allow(non_snake_case)]
pub fn XYZ_TO_SRGB_MAT() -> Matrix3<f64> {
    Matrix3::new(
        03.2406, -1.5372, -0.4986,
        -0.9689, 01.8758, 00.0415,
        00.0557, -0.2040, 01.0570,
    )
}

// The vision deficiency matrices below act directly on gamma-encoded sRGB. They are the widely
// reproduced set from the Coblis simulator (the "colorMatrix" tables), and each row sums to 1 so
// that neutral grays are left alone.

#[allow(non_snake_case)]
pub fn PROTANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.567, 0.433, 0.000,
        0.558, 0.442, 0.000,
        0.000, 0.242, 0.758,
    )
}

#[allow(non_snake_case)]
pub fn PROTANOMALY_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.817, 0.183, 0.000,
        0.333, 0.667, 0.000,
        0.000, 0.125, 0.875,
    )
}

#[allow(non_snake_case)]
pub fn DEUTERANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.625, 0.375, 0.000,
        0.700, 0.300, 0.000,
        0.000, 0.300, 0.700,
    )
}

#[allow(non_snake_case)]
pub fn DEUTERANOMALY_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.800, 0.200, 0.000,
        0.258, 0.742, 0.000,
        0.000, 0.142, 0.858,
    )
}

#[allow(non_snake_case)]
pub fn TRITANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.950, 0.050, 0.000,
        0.000, 0.433, 0.567,
        0.000, 0.475, 0.525,
    )
}

#[allow(non_snake_case)]
pub fn TRITANOMALY_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.967, 0.033, 0.000,
        0.000, 0.733, 0.267,
        0.000, 0.183, 0.817,
    )
}

#[allow(non_snake_case)]
pub fn ACHROMATOPSIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.299, 0.587, 0.114,
        0.299, 0.587, 0.114,
        0.299, 0.587, 0.114,
    )
}

#[allow(non_snake_case)]
pub fn ACHROMATOMALY_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.618, 0.320, 0.062,
        0.163, 0.775, 0.062,
        0.163, 0.320, 0.516,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_matrices_are_inverses() {
        let product = XYZ_TO_SRGB_MAT() * SRGB_TO_XYZ_MAT();
        let identity = Matrix3::<f64>::identity();
        for i in 0..3 {
            for j in 0..3 {
                assert!((product[(i, j)] - identity[(i, j)]).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_vision_rows_sum_to_one() {
        let mats = [
            PROTANOPIA_MAT(),
            PROTANOMALY_MAT(),
            DEUTERANOPIA_MAT(),
            DEUTERANOMALY_MAT(),
            TRITANOPIA_MAT(),
            TRITANOMALY_MAT(),
            ACHROMATOPSIA_MAT(),
            ACHROMATOMALY_MAT(),
        ];
        for mat in mats.iter() {
            for row in mat.row_iter() {
                assert!((row.sum() - 1.0).abs() <= 0.0015, "row {} does not sum to 1", row);
            }
        }
    }
}
