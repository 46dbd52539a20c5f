//! XYZ <-> Lab conversion.
//!
//! CIE 1976 L*a*b* relative to the D65 white point, using the standard
//! piecewise cube-root companding with the 0.008856 (= (6/29)^3) knee.

use chroma_core::{Lab, Xyz, D65_X, D65_Y, D65_Z};

/// Knee of the Lab companding function, (6/29)^3.
const EPSILON: f32 = 0.008856;
/// Slope of the linear segment, (29/6)^2 / 3.
const KAPPA: f32 = 7.787;
/// Intercept of the linear segment, 16/116.
const OFFSET: f32 = 16.0 / 116.0;

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

#[inline]
fn f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    // Same knee expressed in f-space: cube where the cube is above epsilon,
    // otherwise invert the linear segment.
    if t3 > EPSILON {
        t3
    } else {
        (t - OFFSET) / KAPPA
    }
}

/// Converts XYZ (x100 scale, D65) to Lab.
///
/// # Example
///
/// ```rust
/// use chroma_core::Xyz;
/// use chroma_convert::xyz_to_lab;
///
/// // The white point maps to L=100, a=b=0.
/// let white = xyz_to_lab(Xyz::new(95.047, 100.0, 108.883));
/// assert!((white.l - 100.0).abs() < 1e-3);
/// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
/// ```
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = f(xyz.x / D65_X);
    let fy = f(xyz.y / D65_Y);
    let fz = f(xyz.z / D65_Z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts Lab back to XYZ (x100 scale, D65).
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz::new(D65_X * f_inv(fx), D65_Y * f_inv(fy), D65_Z * f_inv(fz))
}
