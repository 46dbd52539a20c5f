//! # chroma-convert
//!
//! Pairwise color space conversions for the sRGB/D65 pipeline.
//!
//! Device RGB is the interchange form; Lab is the perceptual pivot that
//! `chroma-diff` and downstream tooling operate on.
//!
//! # Architecture
//!
//! ```text
//! hex <-> Rgb <-> Xyz <-> Lab <-> Lch
//!          |
//!          +---> Cmyk
//!          +---> Hsl
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::Rgb;
//! use chroma_convert::{rgb_to_lab, lab_to_rgb};
//!
//! let lab = rgb_to_lab(Rgb::from_hex("#c8102e")?);
//! let back = lab_to_rgb(lab);
//! assert_eq!(back.to_hex(), "#c8102e");
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```
//!
//! # Edge Cases
//!
//! - `xyz_to_rgb` clamps out-of-gamut values into [0, 255]
//! - CMYK `k = 1` and HSL `s = 0` are handled by explicit branches,
//!   never by floating-point fallthrough
//! - Hue outputs are always normalized into their declared range
//!
//! # Dependencies
//!
//! - [`chroma-core`] - value types
//!
//! # Used By
//!
//! - `chroma-diff` - Lab pivot for CIEDE2000
//! - `chroma-harmony` - HSL rotation
//! - `chroma-cli` - conversion reports

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod matrix;
pub mod srgb;

mod cmyk;
mod hsl;
mod lab;
mod lch;
mod xyz;

pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use lch::{lab_to_lch, lch_to_lab};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};

use chroma_core::{ChromaResult, Hsl, Lab, Rgb};

/// Converts RGB straight to Lab through the XYZ pivot.
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Converts Lab back to RGB through the XYZ pivot.
#[inline]
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Parses a hex string and converts it to HSL.
///
/// # Errors
///
/// Propagates [`chroma_core::ChromaError::InvalidFormat`] from hex parsing.
#[inline]
pub fn hex_to_hsl(hex: &str) -> ChromaResult<Hsl> {
    Ok(rgb_to_hsl(Rgb::from_hex(hex)?))
}
