//! RGB <-> CMYK conversion.
//!
//! Plain subtractive model derived from normalized RGB. Not calibrated to
//! any press; catalog CMYK values are reference data, not proofs.

use chroma_core::{Cmyk, Rgb};

/// Converts RGB to CMYK.
///
/// `k` is one minus the brightest channel. Pure black (`k = 1`) is
/// special-cased to `(0, 0, 0, 1)` so the divide by `1 - k` never runs.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
/// use chroma_convert::rgb_to_cmyk;
///
/// let black = rgb_to_cmyk(Rgb::new(0, 0, 0));
/// assert_eq!((black.c, black.m, black.y, black.k), (0.0, 0.0, 0.0, 1.0));
/// ```
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_normalized();

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::new_unchecked(0.0, 0.0, 0.0, 1.0);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new_unchecked(c, m, y, k)
}

/// Converts CMYK back to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    Rgb::from_normalized([
        (1.0 - cmyk.c) * (1.0 - cmyk.k),
        (1.0 - cmyk.m) * (1.0 - cmyk.k),
        (1.0 - cmyk.y) * (1.0 - cmyk.k),
    ])
}
