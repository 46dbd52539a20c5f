//! sRGB <-> XYZ conversion matrices.
//!
//! Fixed D65 matrices from the sRGB specification. The pipeline targets
//! sRGB only, so the matrices are baked constants rather than derived from
//! primaries at runtime.

/// Linear sRGB -> XYZ matrix (D65), row-major.
pub const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ -> linear sRGB matrix (D65), row-major.
pub const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Multiplies a row-major 3x3 matrix by a column vector.
#[inline]
pub fn mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_identity() {
        let id = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(mul(&id, [0.2, 0.5, 0.9]), [0.2, 0.5, 0.9]);
    }

    #[test]
    fn test_matrices_are_inverses() {
        let v = [0.3, 0.5, 0.2];
        let back = mul(&XYZ_TO_SRGB, mul(&SRGB_TO_XYZ, v));
        for (a, b) in v.iter().zip(back.iter()) {
            // The published 4-decimal matrices invert to ~1e-4.
            assert!((a - b).abs() < 1e-3, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        let xyz = mul(&SRGB_TO_XYZ, [1.0, 1.0, 1.0]);
        assert!((xyz[0] * 100.0 - 95.047).abs() < 0.1);
        assert!((xyz[1] * 100.0 - 100.0).abs() < 0.1);
        assert!((xyz[2] * 100.0 - 108.883).abs() < 0.2);
    }
}
