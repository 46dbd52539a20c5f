//! # chroma-core
//!
//! Core color value types and the hex codec for the chroma pipeline.
//!
//! Every color is an immutable `Copy` value with no identity beyond its
//! channels. This crate defines the representations; the transforms
//! between them live in `chroma-convert`.
//!
//! # Types
//!
//! | Type | Range / units |
//! |------|---------------|
//! | [`Rgb`] | bytes [0, 255], gamma-encoded sRGB |
//! | [`Xyz`] | x100 scale, D65 white |
//! | [`Lab`] | L in [0, 100], a/b typically +-128 |
//! | [`Lch`] | C >= 0, h in [0, 360) degrees |
//! | [`Hsl`] | h in [0, 1) turns, s/l in [0, 1] |
//! | [`Cmyk`] | all channels in [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Rgb;
//!
//! let red = Rgb::from_hex("#c8102e")?;
//! assert_eq!((red.r, red.g, red.b), (200, 16, 46));
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```
//!
//! # Used By
//!
//! - `chroma-convert` - space conversions
//! - `chroma-diff` - CIEDE2000 / contrast
//! - `chroma-harmony` - palette generation
//! - `chroma-catalog` - swatch matching

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod rgb;
mod spaces;

pub use error::{ChromaError, ChromaResult};
pub use rgb::Rgb;
pub use spaces::{Cmyk, Hsl, Lab, Lch, Xyz, D65_X, D65_Y, D65_Z};
