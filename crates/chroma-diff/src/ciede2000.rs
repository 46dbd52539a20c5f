//! CIEDE2000 color difference.
//!
//! The 2000 revision of the CIE difference formula: chroma compensation
//! (G), hue-dependent weighting (T), and a rotation term (RT) that
//! corrects the blue region around 275 degrees.
//!
//! # Reference
//!
//! Sharma, Wu, Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Res. Appl. 30 (2005).

use std::f32::consts::PI;

use chroma_core::Lab;

/// Parametric weights. Unity for the reference conditions used here.
const KL: f32 = 1.0;
const KC: f32 = 1.0;
const KH: f32 = 1.0;

/// 25^7, the constant in the G and RC chroma ratios.
const POW25_7: f32 = 6_103_515_625.0;

/// Computes the CIEDE2000 difference between two Lab colors.
///
/// Deterministic and symmetric: `delta_e_2000(a, b) == delta_e_2000(b, a)`
/// up to floating-point rounding, and zero for identical inputs.
///
/// # Example
///
/// ```rust
/// use chroma_core::Lab;
/// use chroma_diff::delta_e_2000;
///
/// let c = Lab::new(50.0, 2.6772, -79.7751);
/// assert_eq!(delta_e_2000(c, c), 0.0);
/// ```
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f32 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    let avg_l = (l1 + l2) / 2.0;
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let avg_c = (c1 + c2) / 2.0;

    // Chroma compensation: stretch the a axis for near-neutral colors.
    let g = 0.5 * (1.0 - (avg_c.powi(7) / (avg_c.powi(7) + POW25_7)).sqrt());
    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = (a1p * a1p + b1 * b1).sqrt();
    let c2p = (a2p * a2p + b2 * b2).sqrt();
    let avg_cp = (c1p + c2p) / 2.0;

    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    // Mean hue with wraparound: when the arc between the hues crosses
    // zero, average on the short way round. If either chroma vanishes the
    // remaining hue stands alone.
    let avg_hp = if c1p == 0.0 || c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() > PI {
        (h1p + h2p + 2.0 * PI) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let t = 1.0 - 0.17 * (avg_hp - 30.0_f32.to_radians()).cos()
        + 0.24 * (2.0 * avg_hp).cos()
        + 0.32 * (3.0 * avg_hp + 6.0_f32.to_radians()).cos()
        - 0.20 * (4.0 * avg_hp - 63.0_f32.to_radians()).cos();

    // Hue delta wrapped into (-pi, pi]; zero when either chroma is zero.
    let mut dhp = h2p - h1p;
    if c1p == 0.0 || c2p == 0.0 {
        dhp = 0.0;
    } else if dhp.abs() > PI {
        if h2p <= h1p {
            dhp += 2.0 * PI;
        } else {
            dhp -= 2.0 * PI;
        }
    }

    let dl = l2 - l1;
    let dc = c2p - c1p;
    let dh = 2.0 * (c1p * c2p).sqrt() * (dhp / 2.0).sin();

    let sl = 1.0 + (0.015 * (avg_l - 50.0).powi(2)) / (20.0 + (avg_l - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * avg_cp;
    let sh = 1.0 + 0.015 * avg_cp * t;

    let delta_theta =
        30.0_f32.to_radians() * (-((avg_hp.to_degrees() - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * (avg_cp.powi(7) / (avg_cp.powi(7) + POW25_7)).sqrt();
    let rt = -rc * (2.0 * delta_theta).sin();

    let lt = dl / (KL * sl);
    let ct = dc / (KC * sc);
    let ht = dh / (KH * sh);

    (lt * lt + ct * ct + ht * ht + rt * ct * ht).sqrt()
}

/// Hue angle via atan2, normalized into [0, 2*pi).
#[inline]
fn hue_angle(b: f32, ap: f32) -> f32 {
    let h = b.atan2(ap);
    if h >= 0.0 { h } else { h + 2.0 * PI }
}
