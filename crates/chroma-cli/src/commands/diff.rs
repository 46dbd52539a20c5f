//! CIEDE2000 difference between two colors.

use anyhow::Result;
use chroma_convert::rgb_to_lab;
use chroma_diff::delta_e_2000;
use tracing::debug;

use crate::DiffArgs;

pub fn run(args: DiffArgs) -> Result<()> {
    let a = super::parse_color(&args.a)?;
    let b = super::parse_color(&args.b)?;

    let lab_a = rgb_to_lab(a);
    let lab_b = rgb_to_lab(b);
    debug!(a = %a, b = %b, "computing CIEDE2000");

    let de = delta_e_2000(lab_a, lab_b);

    println!("Comparing {} vs {}", a.to_hex(), b.to_hex());
    println!("  Lab A:     {:.4}, {:.4}, {:.4}", lab_a.l, lab_a.a, lab_a.b);
    println!("  Lab B:     {:.4}, {:.4}, {:.4}", lab_b.l, lab_b.a, lab_b.b);
    println!("  deltaE00:  {:.4}", de);

    Ok(())
}
