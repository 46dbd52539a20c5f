//! Lab <-> LCh polar conversion.

use chroma_core::{Lab, Lch};

/// Converts Cartesian Lab to polar LCh.
///
/// Hue is measured counter-clockwise from the +a axis and normalized into
/// [0, 360) degrees. An achromatic color (a = b = 0) gets hue 0.
///
/// # Example
///
/// ```rust
/// use chroma_core::Lab;
/// use chroma_convert::lab_to_lch;
///
/// let lch = lab_to_lch(Lab::new(50.0, 0.0, 30.0));
/// assert!((lch.h - 90.0).abs() < 1e-4);
/// ```
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let mut h = lab.b.atan2(lab.a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    Lch::new(lab.l, c, h)
}

/// Converts polar LCh back to Cartesian Lab.
pub fn lch_to_lab(lch: Lch) -> Lab {
    let hr = lch.h.to_radians();
    Lab::new(lch.l, lch.c * hr.cos(), lch.c * hr.sin())
}
