//! CLI command implementations

pub mod catalog;
pub mod contrast;
pub mod convert;
pub mod diff;
pub mod harmony;

use anyhow::{Context, Result, bail};
use chroma_core::Rgb;

/// Parses a color argument: hex (`#RGB` / `#RRGGBB`, `#` optional) or a
/// comma-separated byte triple (`r,g,b`).
pub fn parse_color(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();

    if trimmed.contains(',') {
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            bail!("expected r,g,b with three components, got {:?}", input);
        }
        let channel = |s: &str| -> Result<u8> {
            s.parse::<u8>()
                .with_context(|| format!("invalid channel {:?} (expected 0-255)", s))
        };
        return Ok(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?));
    }

    trimmed
        .parse::<Rgb>()
        .with_context(|| format!("invalid color {:?}", input))
}
