//! Relative luminance and contrast ratio.
//!
//! WCAG-style contrast between two relative luminances in [0, 1].

use chroma_core::Rgb;
use chroma_convert::rgb_to_xyz;

/// Relative luminance of an RGB color in [0, 1].
///
/// This is the Y tristimulus of the XYZ pivot rescaled from the x100
/// convention, i.e. the luminance the sRGB matrix row
/// `[0.2126, 0.7152, 0.0722]` assigns to the linearized channels.
#[inline]
pub fn relative_luminance(rgb: Rgb) -> f32 {
    rgb_to_xyz(rgb).y / 100.0
}

/// Contrast ratio between two relative luminances.
///
/// `(lighter + 0.05) / (darker + 0.05)`, order-independent, always >= 1.
///
/// # Example
///
/// ```rust
/// use chroma_diff::contrast_ratio;
///
/// // Black on white is the maximum 21:1.
/// assert!((contrast_ratio(1.0, 0.0) - 21.0).abs() < 1e-4);
/// assert_eq!(contrast_ratio(0.3, 0.3), 1.0);
/// ```
#[inline]
pub fn contrast_ratio(l1: f32, l2: f32) -> f32 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_on_white() {
        let white = relative_luminance(Rgb::new(255, 255, 255));
        let black = relative_luminance(Rgb::new(0, 0, 0));
        assert_abs_diff_eq!(contrast_ratio(white, black), 21.0, epsilon = 1e-2);
    }

    #[test]
    fn test_order_independent() {
        let a = relative_luminance(Rgb::new(200, 16, 46));
        let b = relative_luminance(Rgb::new(255, 209, 0));
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, b) >= 1.0);
    }

    #[test]
    fn test_equal_luminance_is_unity() {
        assert_eq!(contrast_ratio(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_luminance_range() {
        assert_abs_diff_eq!(relative_luminance(Rgb::new(255, 255, 255)), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(relative_luminance(Rgb::new(0, 0, 0)), 0.0, epsilon = 1e-6);
    }
}
