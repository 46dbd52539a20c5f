//! Harmony palette generation.

use anyhow::Result;
use chroma_harmony::{generate, HarmonyKind};

use crate::HarmonyArgs;

pub fn run(args: HarmonyArgs) -> Result<()> {
    let base = super::parse_color(&args.color)?;
    let kind: HarmonyKind = args.kind.parse()?;

    let palette = generate(base, kind);

    println!("{} harmony of {}", kind, base.to_hex());
    for color in palette {
        println!("  {}", color.to_hex());
    }

    Ok(())
}
