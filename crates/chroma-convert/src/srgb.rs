//! sRGB companding: the nonlinear encoding between device bytes and the
//! linear light values the XYZ matrix operates on.
//!
//! Naive channel math on gamma-encoded RGB is what this pipeline exists to
//! avoid: every RGB value is decoded to linear light before the matrix and
//! re-encoded after. Both directions are piecewise per IEC 61966-2-1 — a
//! short linear toe below the knee, a 2.4 power curve above it — and both
//! map [0, 1] onto [0, 1].

/// Decodes a gamma-encoded channel to linear light.
///
/// Values at or below the 0.04045 knee take the linear toe `v / 12.92`;
/// the rest take `((v + 0.055) / 1.055)^2.4`.
///
/// # Example
///
/// ```rust
/// use chroma_convert::srgb::eotf;
///
/// // Mid-grey 119/255 decodes to roughly 18% linear reflectance.
/// let linear = eotf(119.0 / 255.0);
/// assert!((linear - 0.18).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light back to the gamma-encoded form.
///
/// Exact inverse of [`eotf`]: `l * 12.92` at or below 0.0031308, otherwise
/// `1.055 * l^(1/2.4) - 0.055`.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes all three channels of a normalized RGB triple.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Encodes all three channels of a linear RGB triple.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
