//! Error types for color value construction and parsing.

use thiserror::Error;

/// Color value error.
///
/// Covers the failure modes of the value layer:
/// - Malformed hex strings
/// - Channel values outside their declared domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChromaError {
    /// Hex string is not 3 or 6 hex digits after stripping `#`.
    #[error("invalid hex color: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidFormat(String),

    /// A channel value lies outside its declared range.
    #[error("{channel} = {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Channel name, e.g. "hsl.s" or "cmyk.k".
        channel: &'static str,
        /// Offending value.
        value: f32,
        /// Lower bound (inclusive).
        min: f32,
        /// Upper bound (inclusive).
        max: f32,
    },
}

/// Result type for color value operations.
pub type ChromaResult<T> = Result<T, ChromaError>;
