//! # chroma-diff
//!
//! Perceptual color difference and contrast.
//!
//! - [`delta_e_2000`] - CIEDE2000 difference between two Lab colors
//! - [`contrast_ratio`] - WCAG-style contrast between two luminances
//! - [`relative_luminance`] - luminance of an RGB color for the above
//!
//! Callers holding colors in other representations convert to Lab through
//! `chroma-convert` first; the RGB-based catalog matching in
//! `chroma-catalog` deliberately uses a cheaper Euclidean metric instead.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::Rgb;
//! use chroma_convert::rgb_to_lab;
//! use chroma_diff::delta_e_2000;
//!
//! let red = rgb_to_lab(Rgb::from_hex("#c8102e")?);
//! let blue = rgb_to_lab(Rgb::from_hex("#0033a0")?);
//! assert!(delta_e_2000(red, blue) > 20.0);
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - value types
//! - [`chroma-convert`] - XYZ pivot for luminance

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ciede2000;
mod contrast;

pub use ciede2000::delta_e_2000;
pub use contrast::{contrast_ratio, relative_luminance};
