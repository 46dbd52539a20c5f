//! # chroma-harmony
//!
//! Hue-rotation color harmony generation.
//!
//! A harmony is a set of hues related by fixed angular offsets on the hue
//! wheel. The base color is converted to HSL, saturation and lightness are
//! held fixed, and the hue is rotated by each offset (modulo one turn).
//!
//! # Harmony kinds
//!
//! | kind | hue offsets (turns) |
//! |------|---------------------|
//! | complementary | 0, +1/2 |
//! | analogous | 0, +1/12, -1/12 |
//! | triadic | 0, +1/3, +2/3 |
//! | split-complementary | 0, +5/12, +7/12 |
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::Rgb;
//! use chroma_harmony::{generate, HarmonyKind};
//!
//! let palette = generate(Rgb::from_hex("#ff0000")?, HarmonyKind::Complementary);
//! assert_eq!(palette[0].to_hex(), "#ff0000");
//! assert_eq!(palette[1].to_hex(), "#00ffff");
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```
//!
//! The kind set is closed: parsing an unknown name fails with
//! [`UnknownHarmony`] instead of silently producing an empty palette, and
//! generation itself never fails.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - value types
//! - [`chroma-convert`] - RGB <-> HSL

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt;
use std::str::FromStr;

use chroma_core::{Hsl, Rgb};
use chroma_convert::{hsl_to_rgb, rgb_to_hsl};
use thiserror::Error;

/// Unknown harmony kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony kind: {0:?} (expected complementary, analogous, triadic or split-complementary)")]
pub struct UnknownHarmony(
    /// The rejected kind name.
    pub String,
);

/// The closed set of supported harmony kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Base hue plus its opposite (+1/2 turn).
    Complementary,
    /// Base hue plus its two neighbors (+-1/12 turn).
    Analogous,
    /// Three hues spaced evenly around the wheel (+1/3, +2/3 turn).
    Triadic,
    /// Base hue plus the two neighbors of its complement (+5/12, +7/12 turn).
    SplitComplementary,
}

impl HarmonyKind {
    /// All kinds, in a stable order.
    pub const ALL: [HarmonyKind; 4] = [
        HarmonyKind::Complementary,
        HarmonyKind::Analogous,
        HarmonyKind::Triadic,
        HarmonyKind::SplitComplementary,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::SplitComplementary => "split-complementary",
        }
    }

    /// Hue offsets in turns, base first.
    ///
    /// The analogous -1/12 offset is expressed as +11/12 so every offset
    /// is already in [0, 1).
    const fn offsets(self) -> &'static [f32] {
        match self {
            HarmonyKind::Complementary => &[0.0, 0.5],
            HarmonyKind::Analogous => &[0.0, 1.0 / 12.0, 11.0 / 12.0],
            HarmonyKind::Triadic => &[0.0, 1.0 / 3.0, 2.0 / 3.0],
            HarmonyKind::SplitComplementary => &[0.0, 5.0 / 12.0, 7.0 / 12.0],
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = UnknownHarmony;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complementary" => Ok(HarmonyKind::Complementary),
            "analogous" => Ok(HarmonyKind::Analogous),
            "triadic" => Ok(HarmonyKind::Triadic),
            "split-complementary" => Ok(HarmonyKind::SplitComplementary),
            other => Err(UnknownHarmony(other.to_owned())),
        }
    }
}

/// Generates a harmony palette from a base color.
///
/// The first entry is always the base color unchanged (bit-exact, not
/// re-derived through HSL); rotated variants follow in the kind's listed
/// order with saturation and lightness held fixed.
pub fn generate(base: Rgb, kind: HarmonyKind) -> Vec<Rgb> {
    let hsl = rgb_to_hsl(base);

    kind.offsets()
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            if i == 0 {
                base
            } else {
                hsl_to_rgb(Hsl::new_unchecked(rotate(hsl.h, *offset), hsl.s, hsl.l))
            }
        })
        .collect()
}

/// Rotates a hue by an offset, wrapping into [0, 1).
#[inline]
fn rotate(h: f32, offset: f32) -> f32 {
    let r = (h + offset) % 1.0;
    if r < 0.0 { r + 1.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_complementary_red() {
        let palette = generate(Rgb::new(255, 0, 0), HarmonyKind::Complementary);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0], Rgb::new(255, 0, 0));
        assert_eq!(palette[1], Rgb::new(0, 255, 255));

        // The second hue sits exactly half a turn away.
        let h0 = rgb_to_hsl(palette[0]).h;
        let h1 = rgb_to_hsl(palette[1]).h;
        assert_abs_diff_eq!(rotate(h1 - h0, 0.0), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_base_first_and_unchanged() {
        let base = Rgb::new(200, 16, 46);
        for kind in HarmonyKind::ALL {
            let palette = generate(base, kind);
            assert_eq!(palette[0], base, "{}", kind);
        }
    }

    #[test]
    fn test_palette_sizes() {
        let base = Rgb::new(0, 51, 160);
        assert_eq!(generate(base, HarmonyKind::Complementary).len(), 2);
        assert_eq!(generate(base, HarmonyKind::Analogous).len(), 3);
        assert_eq!(generate(base, HarmonyKind::Triadic).len(), 3);
        assert_eq!(generate(base, HarmonyKind::SplitComplementary).len(), 3);
    }

    #[test]
    fn test_triadic_hues() {
        let palette = generate(Rgb::new(255, 0, 0), HarmonyKind::Triadic);
        let hues: Vec<f32> = palette.iter().map(|c| rgb_to_hsl(*c).h).collect();
        assert_abs_diff_eq!(hues[1], 1.0 / 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(hues[2], 2.0 / 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        // Base hue 0: the -1/12 neighbor must wrap to 11/12, not go negative.
        let palette = generate(Rgb::new(255, 0, 0), HarmonyKind::Analogous);
        let h = rgb_to_hsl(palette[2]).h;
        assert_abs_diff_eq!(h, 11.0 / 12.0, epsilon = 1e-3);
    }

    #[test]
    fn test_achromatic_base() {
        // Grey has no hue; every rotation lands on the same grey.
        let palette = generate(Rgb::new(128, 128, 128), HarmonyKind::Triadic);
        for c in &palette {
            assert_eq!(*c, Rgb::new(128, 128, 128));
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("triadic".parse::<HarmonyKind>().unwrap(), HarmonyKind::Triadic);
        assert_eq!(
            "split-complementary".parse::<HarmonyKind>().unwrap(),
            HarmonyKind::SplitComplementary
        );
        let err = "tetradic".parse::<HarmonyKind>().unwrap_err();
        assert_eq!(err, UnknownHarmony("tetradic".to_owned()));
    }

    #[test]
    fn test_name_roundtrip() {
        for kind in HarmonyKind::ALL {
            assert_eq!(kind.name().parse::<HarmonyKind>().unwrap(), kind);
        }
    }
}
