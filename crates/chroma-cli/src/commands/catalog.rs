//! Swatch catalog search and nearest-match commands.

use anyhow::{Context, Result};
use chroma_catalog::Catalog;
use std::path::Path;
use tracing::debug;

use crate::{NearestArgs, SearchArgs};

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading external catalog");
            Catalog::from_json_file(p)
                .with_context(|| format!("failed to load catalog: {}", p.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

pub fn run_search(args: SearchArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let hits = catalog.search(&args.term);

    if hits.is_empty() {
        println!("No swatches matching {:?}", args.term);
        return Ok(());
    }

    println!("{} match(es) for {:?}:", hits.len(), args.term);
    for swatch in hits {
        println!("  {:<20} {:<10} {}", swatch.name, swatch.code, swatch.hex);
    }

    Ok(())
}

pub fn run_nearest(args: NearestArgs) -> Result<()> {
    let query = super::parse_color(&args.color)?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    match catalog.nearest(query) {
        Some((swatch, dist)) => {
            println!("Nearest to {}:", query.to_hex());
            println!("  {:<20} {:<10} {}", swatch.name, swatch.code, swatch.hex);
            println!("  RGB distance: {:.2}", dist);
        }
        None => println!("Catalog is empty"),
    }

    Ok(())
}
