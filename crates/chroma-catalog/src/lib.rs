//! # chroma-catalog
//!
//! Read-only reference swatch catalog with substring search and
//! nearest-color matching.
//!
//! The catalog is injected at construction and never mutated afterward, so
//! a `Catalog` is safe to share across threads without locking. Matching
//! uses Euclidean distance in raw RGB space: for "which catalog entry is
//! this scanned color" the cheap metric is adequate and much faster than
//! CIEDE2000 over a large table.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_core::Rgb;
//! use chroma_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//!
//! let hits = catalog.search("blue");
//! assert_eq!(hits[0].name, "PANTONE Blue");
//!
//! let (swatch, dist) = catalog.nearest(Rgb::from_hex("#c8102e")?).unwrap();
//! assert_eq!(swatch.name, "PANTONE Red");
//! assert_eq!(dist, 0.0);
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - value types
//! - `serde` / `serde_json` - external catalog files

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use chroma_core::{ChromaError, Cmyk, Rgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog loading error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Could not read the catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog entry carries a malformed hex color or out-of-range CMYK.
    #[error("invalid entry {name:?}: {source}")]
    InvalidEntry {
        /// Name of the offending entry.
        name: String,
        /// Underlying hex parse or channel range failure.
        source: ChromaError,
    },
}

/// One reference swatch: name, vendor code, hex value, and nominal CMYK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// Display name, e.g. "PANTONE Red".
    pub name: String,
    /// Vendor code, e.g. "186 C".
    pub code: String,
    /// Hex color, `#rrggbb`.
    pub hex: String,
    /// Nominal CMYK channels in [0, 1].
    pub cmyk: Cmyk,
}

impl Swatch {
    /// The swatch color as RGB.
    ///
    /// # Errors
    ///
    /// Propagates [`ChromaError::InvalidFormat`] if `hex` is malformed.
    pub fn rgb(&self) -> Result<Rgb, ChromaError> {
        Rgb::from_hex(&self.hex)
    }
}

/// Immutable swatch table with search and nearest-match lookup.
///
/// RGB values are decoded once at construction so `nearest` never parses
/// hex in its inner loop.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Swatch>,
    rgb: Vec<Rgb>,
}

impl Catalog {
    /// Builds a catalog from swatch entries.
    ///
    /// Externally supplied entries (JSON files, downstream services) are
    /// validated here: hex must parse and every CMYK channel must lie in
    /// [0, 1].
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidEntry`] if any entry's hex fails to parse or
    /// its CMYK is out of range.
    pub fn new(entries: Vec<Swatch>) -> Result<Self, CatalogError> {
        let rgb = entries
            .iter()
            .map(|s| {
                let invalid = |source| CatalogError::InvalidEntry {
                    name: s.name.clone(),
                    source,
                };
                Cmyk::new(s.cmyk.c, s.cmyk.m, s.cmyk.y, s.cmyk.k).map_err(invalid)?;
                s.rgb().map_err(invalid)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries, rgb })
    }

    /// The built-in reference sample.
    ///
    /// A small PANTONE-style table for tests and demos; real deployments
    /// substitute a full catalog via [`Catalog::new`] or
    /// [`Catalog::from_json_file`].
    pub fn builtin() -> Self {
        let entries = vec![
            swatch("PANTONE Red", "186 C", "#C8102E", 0.0, 1.0, 0.81, 0.04),
            swatch("PANTONE Blue", "293 C", "#0033A0", 1.0, 0.77, 0.0, 0.02),
            swatch("PANTONE Yellow", "Yellow C", "#FFD100", 0.0, 0.0, 1.0, 0.0),
            swatch("PANTONE Green", "347 C", "#009A44", 0.93, 0.0, 1.0, 0.0),
            swatch("PANTONE Orange", "021 C", "#FE5000", 0.0, 0.76, 1.0, 0.0),
            swatch("PANTONE Purple", "2607 C", "#500778", 0.82, 1.0, 0.0, 0.12),
            swatch("PANTONE Black", "Black C", "#2D2926", 0.0, 0.1, 0.19, 0.82),
        ];
        // The builtin rows are known-good, so this cannot fail.
        match Self::new(entries) {
            Ok(catalog) => catalog,
            Err(_) => unreachable!("builtin catalog entries are valid"),
        }
    }

    /// Loads a catalog from a JSON file: an array of swatch objects with
    /// `name`, `code`, `hex` and `cmyk` fields.
    ///
    /// # Errors
    ///
    /// I/O, JSON, or per-entry hex failures as [`CatalogError`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let entries: Vec<Swatch> = serde_json::from_str(&text)?;
        Self::new(entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[Swatch] {
        &self.entries
    }

    /// Case-insensitive substring search over name and code.
    ///
    /// Results come back in catalog order, unranked. No match is an empty
    /// vector, never an error.
    pub fn search(&self, term: &str) -> Vec<&Swatch> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle) || s.code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Nearest entry to a query color by Euclidean RGB distance.
    ///
    /// Ties go to the first entry seen. Returns `None` only when the
    /// catalog is empty.
    pub fn nearest(&self, query: Rgb) -> Option<(&Swatch, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (i, rgb) in self.rgb.iter().enumerate() {
            let dist = distance(query, *rgb);
            match best {
                Some((_, d)) if dist >= d => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, d)| (&self.entries[i], d))
    }
}

/// Euclidean distance between two RGB colors in raw channel space.
#[inline]
fn distance(a: Rgb, b: Rgb) -> f32 {
    let dr = f32::from(a.r) - f32::from(b.r);
    let dg = f32::from(a.g) - f32::from(b.g);
    let db = f32::from(a.b) - f32::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

fn swatch(name: &str, code: &str, hex: &str, c: f32, m: f32, y: f32, k: f32) -> Swatch {
    Swatch {
        name: name.to_owned(),
        code: code.to_owned(),
        hex: hex.to_owned(),
        cmyk: Cmyk::new_unchecked(c, m, y, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            swatch("PANTONE Red", "186 C", "#C8102E", 0.0, 1.0, 0.81, 0.04),
            swatch("PANTONE Blue", "293 C", "#0033A0", 1.0, 0.77, 0.0, 0.02),
            swatch("Yellow C", "Yellow C", "#FFD100", 0.0, 0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = sample();
        let hits = catalog.search("blue");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "PANTONE Blue");

        // Code field is searched too.
        let hits = catalog.search("186");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "PANTONE Red");
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(sample().search("chartreuse").is_empty());
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = sample();
        let hits = catalog.search("pantone");
        let names: Vec<&str> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["PANTONE Red", "PANTONE Blue"]);
    }

    #[test]
    fn test_nearest_exact_match() {
        let catalog = sample();
        let (swatch, dist) = catalog.nearest(Rgb::from_hex("#C8102E").unwrap()).unwrap();
        assert_eq!(swatch.name, "PANTONE Red");
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_nearest_approximate() {
        let catalog = sample();
        // A dark red lands on PANTONE Red, not Blue or Yellow.
        let (swatch, dist) = catalog.nearest(Rgb::new(190, 30, 50)).unwrap();
        assert_eq!(swatch.name, "PANTONE Red");
        assert!(dist > 0.0);
    }

    #[test]
    fn test_nearest_tie_first_seen_wins() {
        let catalog = Catalog::new(vec![
            swatch("First", "1", "#101010", 0.0, 0.0, 0.0, 0.94),
            swatch("Second", "2", "#101010", 0.0, 0.0, 0.0, 0.94),
        ])
        .unwrap();
        let (swatch, _) = catalog.nearest(Rgb::new(16, 16, 16)).unwrap();
        assert_eq!(swatch.name, "First");
    }

    #[test]
    fn test_nearest_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.nearest(Rgb::new(0, 0, 0)).is_none());
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let err = Catalog::new(vec![swatch("Broken", "0", "#12345", 0.0, 0.0, 0.0, 0.0)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { .. }));
    }

    #[test]
    fn test_out_of_range_cmyk_rejected() {
        // Serde alone does not bound the channels; construction must.
        let json = r##"[
            {"name": "Hot", "code": "H-1", "hex": "#ff0000",
             "cmyk": {"c": 3.0, "m": -1.0, "y": 0.0, "k": 0.0}}
        ]"##;
        let entries: Vec<Swatch> = serde_json::from_str(json).unwrap();
        let err = Catalog::new(entries).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidEntry {
                source: ChromaError::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.search("yellow")[0].code, "Yellow C");
    }

    #[test]
    fn test_swatch_json_roundtrip() {
        let s = swatch("PANTONE Red", "186 C", "#C8102E", 0.0, 1.0, 0.81, 0.04);
        let json = serde_json::to_string(&s).unwrap();
        let back: Swatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
