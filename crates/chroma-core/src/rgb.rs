//! Device RGB and the hex codec.
//!
//! [`Rgb`] holds gamma-encoded sRGB bytes, the interchange form every other
//! space converts through. Hex parsing accepts `#RGB` and `#RRGGBB`
//! (case-insensitive, `#` optional); serialization is always lowercase
//! `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChromaError, ChromaResult};

/// Gamma-encoded sRGB color, one byte per channel.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
///
/// let c = Rgb::from_hex("#C8102E").unwrap();
/// assert_eq!(c, Rgb::new(200, 16, 46));
/// assert_eq!(c.to_hex(), "#c8102e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel [0, 255].
    pub r: u8,
    /// Green channel [0, 255].
    pub g: u8,
    /// Blue channel [0, 255].
    pub b: u8,
}

impl Rgb {
    /// Creates an RGB color from byte channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string.
    ///
    /// Strips an optional leading `#`, expands 3-digit shorthand by doubling
    /// each nibble (`#abc` -> `#aabbcc`), then parses the 6 digits as a
    /// base-16 integer and extracts each channel by shift/mask.
    ///
    /// # Errors
    ///
    /// [`ChromaError::InvalidFormat`] if the input is not exactly 3 or 6 hex
    /// digits after stripping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#abc"), Rgb::from_hex("aabbcc"));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> ChromaResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChromaError::InvalidFormat(hex.to_owned()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(ChromaError::InvalidFormat(hex.to_owned())),
        };

        let packed = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ChromaError::InvalidFormat(hex.to_owned()))?;

        Ok(Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        })
    }

    /// Formats as lowercase `#rrggbb`.
    #[inline]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels normalized to [0, 1] in RGB order.
    #[inline]
    pub fn to_normalized(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Builds an RGB color from normalized [0, 1] channels.
    ///
    /// Each channel is clamped into [0, 1] before scaling and rounding, so
    /// rendering-facing outputs never wrap.
    #[inline]
    pub fn from_normalized(rgb: [f32; 3]) -> Self {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: byte(rgb[0]),
            g: byte(rgb[1]),
            b: byte(rgb[2]),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c = Rgb::from_hex("#C8102E").unwrap();
        assert_eq!(c, Rgb::new(200, 16, 46));
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(Rgb::from_hex("0033a0").unwrap(), Rgb::new(0, 51, 160));
    }

    #[test]
    fn test_shorthand_expansion() {
        assert_eq!(Rgb::from_hex("#abc").unwrap(), Rgb::from_hex("#aabbcc").unwrap());
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_invalid_inputs() {
        for bad in ["", "#", "#12345", "#1234567", "#gggggg", "not a color"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Rgb::new(255, 209, 0);
        assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
        assert_eq!(c.to_hex(), "#ffd100");
    }

    #[test]
    fn test_normalized_roundtrip() {
        for c in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(12, 200, 97)] {
            assert_eq!(Rgb::from_normalized(c.to_normalized()), c);
        }
    }

    #[test]
    fn test_from_normalized_clamps() {
        assert_eq!(Rgb::from_normalized([1.5, -0.2, 0.5]), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_display_and_fromstr() {
        let c: Rgb = "#FFD100".parse().unwrap();
        assert_eq!(c.to_string(), "#ffd100");
    }
}
