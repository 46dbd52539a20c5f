//! Contrast ratio between two colors.

use anyhow::Result;
use chroma_diff::{contrast_ratio, relative_luminance};

use crate::ContrastArgs;

pub fn run(args: ContrastArgs) -> Result<()> {
    let a = super::parse_color(&args.a)?;
    let b = super::parse_color(&args.b)?;

    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let ratio = contrast_ratio(la, lb);

    println!("Contrast {} vs {}", a.to_hex(), b.to_hex());
    println!("  luminance A: {:.4}", la);
    println!("  luminance B: {:.4}", lb);
    println!("  ratio:       {:.2}:1", ratio);

    Ok(())
}
