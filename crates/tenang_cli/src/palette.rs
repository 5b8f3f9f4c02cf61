//! Registry loading for CLI commands

use std::path::Path;

use anyhow::{Context, Result};
use tenang_theme::{PaletteConfig, PaletteRegistry};

/// Build the registry from a palette file, or the built-in palette
pub fn load_registry(path: Option<&Path>) -> Result<PaletteRegistry> {
    let config = match path {
        Some(path) => PaletteConfig::load(path)
            .with_context(|| format!("Failed to load palette config {}", path.display()))?,
        None => PaletteConfig::builtin(),
    };

    let registry =
        PaletteRegistry::from_config(&config).context("Invalid palette configuration")?;
    tracing::debug!(
        source = %path.map_or("built-in".into(), |p| p.display().to_string()),
        palettes = registry.len(),
        "registry ready"
    );
    Ok(registry)
}
