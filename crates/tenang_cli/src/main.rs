//! Tenang CLI
//!
//! Inspect generated color scales, the palette registry, and resolved
//! styles from the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod palette;

#[derive(Parser)]
#[command(name = "tenang")]
#[command(version, about = "Tenang theming toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Palette file to build the registry from (defaults to the built-in palette)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a base color into its 11-step tonal scale
    Scale {
        /// Base color (#rrggbb, rgb(), hsl(), ...)
        color: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List registered palettes
    Palettes {
        /// Print every palette's scales as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the composed style of a surface and print it as JSON
    Resolve(ResolveArgs),

    /// Print the built-in palette configuration as TOML
    Defaults,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Cultural tradition id
    #[arg(long, short)]
    pub tradition: Option<String>,

    /// Variant (default, meditation, cultural, elevated, glass, minimal)
    #[arg(long, default_value = "default")]
    pub variant: String,

    /// Size (sm, md, lg, xl, full)
    #[arg(long, default_value = "md")]
    pub size: String,

    /// Padding (none, sm, md, lg, xl)
    #[arg(long, default_value = "md")]
    pub padding: String,

    /// Shadow (none, sm, md, lg, xl)
    #[arg(long, default_value = "sm")]
    pub shadow: String,

    #[arg(long)]
    pub gradient: bool,

    /// Cultural motif overlay
    #[arg(long)]
    pub pattern: bool,

    /// Spiritual glow (meditation variant)
    #[arg(long)]
    pub glow: bool,

    #[arg(long)]
    pub breathing: bool,

    #[arg(long)]
    pub hoverable: bool,

    #[arg(long)]
    pub clickable: bool,

    #[arg(long)]
    pub hovered: bool,

    #[arg(long)]
    pub pressed: bool,

    #[arg(long)]
    pub focused: bool,

    #[arg(long)]
    pub selected: bool,

    /// Disable pointer overlays
    #[arg(long = "static")]
    pub non_interactive: bool,

    /// Print only the base style (no overlays or animation)
    #[arg(long)]
    pub base: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scale { color, json } => commands::scale(&color, json),
        Commands::Palettes { json } => {
            let registry = palette::load_registry(cli.config.as_deref())?;
            commands::palettes(&registry, json)
        }
        Commands::Resolve(args) => {
            let registry = palette::load_registry(cli.config.as_deref())?;
            commands::resolve(&registry, &args)
        }
        Commands::Defaults => commands::defaults(),
    }
}
