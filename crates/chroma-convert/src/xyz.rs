//! RGB <-> XYZ conversion.
//!
//! Device RGB is linearized through the sRGB EOTF, pushed through the
//! fixed D65 matrix, and scaled x100 to the conventional XYZ range.

use chroma_core::{Rgb, Xyz};

use crate::matrix::{mul, SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::srgb;

/// Converts gamma-encoded RGB to XYZ (x100 scale, D65).
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
/// use chroma_convert::rgb_to_xyz;
///
/// let white = rgb_to_xyz(Rgb::new(255, 255, 255));
/// assert!((white.y - 100.0).abs() < 0.1);
/// ```
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = srgb::eotf_rgb(rgb.to_normalized());
    let [x, y, z] = mul(&SRGB_TO_XYZ, linear);
    Xyz::new(x * 100.0, y * 100.0, z * 100.0)
}

/// Converts XYZ (x100 scale, D65) back to gamma-encoded RGB.
///
/// Out-of-gamut values are clamped into [0, 1] before scaling to bytes,
/// so the result is always a displayable color.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let linear = mul(&XYZ_TO_SRGB, [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0]);
    let encoded = srgb::oetf_rgb(linear);
    Rgb::from_normalized(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let black = rgb_to_xyz(Rgb::new(0, 0, 0));
        assert_eq!((black.x, black.y, black.z), (0.0, 0.0, 0.0));

        let white = rgb_to_xyz(Rgb::new(255, 255, 255));
        assert!((white.x - 95.047).abs() < 0.1, "X={}", white.x);
        assert!((white.y - 100.0).abs() < 0.1, "Y={}", white.y);
        assert!((white.z - 108.883).abs() < 0.2, "Z={}", white.z);
    }

    #[test]
    fn test_roundtrip_within_one_unit() {
        // Sweep a coarse grid of the RGB cube; each channel must come back
        // within +-1 after rounding.
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let c = Rgb::new(r as u8, g as u8, b as u8);
                    let back = xyz_to_rgb(rgb_to_xyz(c));
                    assert!(
                        (i16::from(back.r) - i16::from(c.r)).abs() <= 1
                            && (i16::from(back.g) - i16::from(c.g)).abs() <= 1
                            && (i16::from(back.b) - i16::from(c.b)).abs() <= 1,
                        "{:?} -> {:?}",
                        c,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        // A point far outside the sRGB gamut still yields valid bytes.
        let c = xyz_to_rgb(Xyz::new(120.0, 130.0, 140.0));
        assert_eq!(c, Rgb::new(255, 255, 255));
    }
}
