//! chroma - color conversion and palette CLI
//!
//! Front-end over the chroma crates: space conversions, CIEDE2000,
//! contrast, harmony palettes and swatch catalog lookups.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color conversion and palette tool")]
#[command(long_about = "
Colorimetrically correct conversions and perceptual color relationships.

Colors are given as hex (#RGB / #RRGGBB, leading # optional) or as
comma-separated byte triples (r,g,b).

Examples:
  chroma convert '#c8102e'              # All representations of a color
  chroma diff '#c8102e' '#0033a0'       # CIEDE2000 difference
  chroma contrast '#ffffff' '#767676'   # WCAG contrast ratio
  chroma harmony '#ff0000' triadic      # Harmony palette
  chroma search blue                    # Catalog substring search
  chroma nearest '#c9112f'              # Nearest catalog swatch
  chroma nearest '#c9112f' --catalog swatches.json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a color in every supported representation
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// CIEDE2000 difference between two colors
    #[command(visible_alias = "d")]
    Diff(DiffArgs),

    /// Contrast ratio between two colors
    Contrast(ContrastArgs),

    /// Generate a harmony palette from a base color
    #[command(visible_alias = "h")]
    Harmony(HarmonyArgs),

    /// Search the swatch catalog by name or code
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Find the nearest catalog swatch to a color
    #[command(visible_alias = "n")]
    Nearest(NearestArgs),
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Color (hex or r,g,b)
    color: String,
}

/// Arguments for the `diff` command.
#[derive(Args)]
struct DiffArgs {
    /// First color (hex or r,g,b)
    a: String,

    /// Second color (hex or r,g,b)
    b: String,
}

/// Arguments for the `contrast` command.
#[derive(Args)]
struct ContrastArgs {
    /// First color (hex or r,g,b)
    a: String,

    /// Second color (hex or r,g,b)
    b: String,
}

/// Arguments for the `harmony` command.
#[derive(Args)]
struct HarmonyArgs {
    /// Base color (hex or r,g,b)
    color: String,

    /// Harmony kind: complementary, analogous, triadic, split-complementary
    kind: String,
}

/// Arguments for the `search` command.
#[derive(Args)]
struct SearchArgs {
    /// Substring to match against swatch names and codes
    term: String,

    /// JSON swatch catalog to search instead of the builtin sample
    #[arg(long)]
    catalog: Option<PathBuf>,
}

/// Arguments for the `nearest` command.
#[derive(Args)]
struct NearestArgs {
    /// Query color (hex or r,g,b)
    color: String,

    /// JSON swatch catalog to match against instead of the builtin sample
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Diff(args) => commands::diff::run(args),
        Commands::Contrast(args) => commands::contrast::run(args),
        Commands::Harmony(args) => commands::harmony::run(args),
        Commands::Search(args) => commands::catalog::run_search(args),
        Commands::Nearest(args) => commands::catalog::run_nearest(args),
    }
}
