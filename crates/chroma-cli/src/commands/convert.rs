//! Print a color in every supported representation.

use anyhow::Result;
use chroma_convert::{lab_to_lch, rgb_to_cmyk, rgb_to_hsl, rgb_to_xyz, xyz_to_lab};
use tracing::debug;

use crate::ConvertArgs;

pub fn run(args: ConvertArgs) -> Result<()> {
    let rgb = super::parse_color(&args.color)?;
    debug!(color = %rgb, "converting");

    let xyz = rgb_to_xyz(rgb);
    let lab = xyz_to_lab(xyz);
    let lch = lab_to_lch(lab);
    let cmyk = rgb_to_cmyk(rgb);
    let hsl = rgb_to_hsl(rgb);

    println!("hex:  {}", rgb.to_hex());
    println!("rgb:  {}, {}, {}", rgb.r, rgb.g, rgb.b);
    println!("xyz:  {:.4}, {:.4}, {:.4}", xyz.x, xyz.y, xyz.z);
    println!("lab:  {:.4}, {:.4}, {:.4}", lab.l, lab.a, lab.b);
    println!("lch:  {:.4}, {:.4}, {:.4}", lch.l, lch.c, lch.h);
    println!("cmyk: {:.4}, {:.4}, {:.4}, {:.4}", cmyk.c, cmyk.m, cmyk.y, cmyk.k);
    println!("hsl:  {:.4}, {:.4}, {:.4}", hsl.h, hsl.s, hsl.l);

    Ok(())
}
