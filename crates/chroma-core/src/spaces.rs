//! Derived color space value types.
//!
//! All types are plain `Copy` values with no identity; conversion math
//! lives in `chroma-convert`. User-supplied HSL/CMYK go through validated
//! constructors that reject out-of-domain channels; the float spaces
//! produced by the pipeline itself (XYZ, Lab, LCh) are unvalidated since
//! their useful range depends on the input gamut.

use crate::error::{ChromaError, ChromaResult};

/// D65 reference white point, X component (x100 scale).
pub const D65_X: f32 = 95.047;
/// D65 reference white point, Y component (x100 scale).
pub const D65_Y: f32 = 100.0;
/// D65 reference white point, Z component (x100 scale).
pub const D65_Z: f32 = 108.883;

/// CIE XYZ tristimulus values, x100 scale, D65 white.
///
/// Linear-light and device-independent; the pivot between device RGB and
/// the perceptual Lab family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus, nominally [0, 95.047] for in-gamut sRGB.
    pub x: f32,
    /// Y tristimulus (relative luminance), nominally [0, 100].
    pub y: f32,
    /// Z tristimulus, nominally [0, 108.883] for in-gamut sRGB.
    pub z: f32,
}

impl Xyz {
    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// CIE 1976 L*a*b*, the perceptually uniform pivot space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, [0, 100].
    pub l: f32,
    /// Green-red opponent axis, typically within +-128.
    pub a: f32,
    /// Blue-yellow opponent axis, typically within +-128.
    pub b: f32,
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// Polar form of [`Lab`]: lightness, chroma, hue angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lch {
    /// Lightness, [0, 100].
    pub l: f32,
    /// Chroma, >= 0.
    pub c: f32,
    /// Hue angle in degrees, [0, 360).
    pub h: f32,
}

impl Lch {
    /// Creates an LCh value.
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }
}

/// Hue/saturation/lightness with hue as a fraction of a full turn.
///
/// Hue lives in [0, 1) turns rather than degrees; harmony rotation is
/// plain modular arithmetic on this representation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in turns, [0, 1).
    pub h: f32,
    /// Saturation, [0, 1].
    pub s: f32,
    /// Lightness, [0, 1].
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL value, validating each channel.
    ///
    /// # Errors
    ///
    /// [`ChromaError::OutOfRange`] if `h` is outside [0, 1) or `s`/`l`
    /// outside [0, 1].
    pub fn new(h: f32, s: f32, l: f32) -> ChromaResult<Self> {
        if !(0.0..1.0).contains(&h) {
            return Err(ChromaError::OutOfRange { channel: "hsl.h", value: h, min: 0.0, max: 1.0 });
        }
        check_unit("hsl.s", s)?;
        check_unit("hsl.l", l)?;
        Ok(Self { h, s, l })
    }

    /// Creates an HSL value without validation.
    ///
    /// For pipeline-internal values already known to be in range.
    #[inline]
    pub const fn new_unchecked(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// Subtractive CMYK, each channel in [0, 1].
///
/// Derived arithmetically from RGB; not calibrated to any press profile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan, [0, 1].
    pub c: f32,
    /// Magenta, [0, 1].
    pub m: f32,
    /// Yellow, [0, 1].
    pub y: f32,
    /// Key (black), [0, 1].
    pub k: f32,
}

impl Cmyk {
    /// Creates a CMYK value, validating each channel.
    ///
    /// # Errors
    ///
    /// [`ChromaError::OutOfRange`] if any channel is outside [0, 1].
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> ChromaResult<Self> {
        check_unit("cmyk.c", c)?;
        check_unit("cmyk.m", m)?;
        check_unit("cmyk.y", y)?;
        check_unit("cmyk.k", k)?;
        Ok(Self { c, m, y, k })
    }

    /// Creates a CMYK value without validation.
    #[inline]
    pub const fn new_unchecked(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }
}

fn check_unit(channel: &'static str, value: f32) -> ChromaResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ChromaError::OutOfRange { channel, value, min: 0.0, max: 1.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_validation() {
        assert!(Hsl::new(0.5, 0.5, 0.5).is_ok());
        assert!(Hsl::new(0.0, 0.0, 1.0).is_ok());
        // Hue range is half-open: a full turn wraps to zero.
        assert!(Hsl::new(1.0, 0.5, 0.5).is_err());
        assert!(Hsl::new(-0.1, 0.5, 0.5).is_err());
        assert!(Hsl::new(0.5, 1.2, 0.5).is_err());
    }

    #[test]
    fn test_cmyk_validation() {
        assert!(Cmyk::new(0.0, 1.0, 0.81, 0.04).is_ok());
        assert!(Cmyk::new(1.1, 0.0, 0.0, 0.0).is_err());
        assert!(Cmyk::new(0.0, 0.0, 0.0, -0.01).is_err());
    }

    #[test]
    fn test_out_of_range_reports_channel() {
        let err = Cmyk::new(0.0, 0.0, 2.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("cmyk.y"));
    }
}
