//! RGB <-> HSL conversion.
//!
//! Hue is a fraction of a full turn in [0, 1); harmony rotation works on
//! this form directly. Achromatic colors (`s = 0`) bypass hue arithmetic
//! entirely in both directions.

use chroma_core::{Hsl, Rgb};

/// Converts RGB to HSL.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
/// use chroma_convert::rgb_to_hsl;
///
/// let red = rgb_to_hsl(Rgb::new(255, 0, 0));
/// assert_eq!(red.h, 0.0);
/// assert_eq!(red.s, 1.0);
/// assert_eq!(red.l, 0.5);
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, report zero.
        return Hsl::new_unchecked(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h /= 6.0;
    if h >= 1.0 {
        h -= 1.0;
    }

    Hsl::new_unchecked(h, s, l)
}

/// Converts HSL back to RGB using six-segment hue interpolation.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    if hsl.s == 0.0 {
        // Achromatic short-circuit: grey regardless of hue.
        return Rgb::from_normalized([hsl.l, hsl.l, hsl.l]);
    }

    let q = if hsl.l < 0.5 {
        hsl.l * (1.0 + hsl.s)
    } else {
        hsl.l + hsl.s - hsl.l * hsl.s
    };
    let p = 2.0 * hsl.l - q;

    Rgb::from_normalized([
        hue_to_channel(p, q, hsl.h + 1.0 / 3.0),
        hue_to_channel(p, q, hsl.h),
        hue_to_channel(p, q, hsl.h - 1.0 / 3.0),
    ])
}

/// One segment of the classic six-segment hue interpolation.
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
