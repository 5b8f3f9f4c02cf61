//! Palette registry
//!
//! The registry holds every named palette the style engine resolves
//! against. It is built once, validated as a whole, and never mutated
//! afterwards, so any number of threads can read it without locking.
//!
//! ```rust
//! use tenang_theme::{PaletteRegistry, ScaleStep};
//!
//! let registry = PaletteRegistry::builtin().unwrap();
//! let javanese = registry.tradition("javanese").unwrap();
//! let gold = javanese.accent.get(ScaleStep::S500);
//!
//! // Unknown keys fall back to the default palette instead of failing
//! let fallback = registry.lookup_or_default("atlantis");
//! assert_eq!(fallback, registry.default_palette());
//! # let _ = gold;
//! ```

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tenang_core::Color;

use crate::config::{PaletteConfig, TraditionColors};
use crate::error::{Result, ThemeError};
use crate::palette::{Palette, RegionalPalette};
use crate::scale::{self, ColorToken};

/// Global registry instance
static REGISTRY: OnceLock<PaletteRegistry> = OnceLock::new();

/// Palette served for unknown keys
pub const DEFAULT_PALETTE_KEY: &str = "primary";

/// Palettes the style engine cannot resolve without
pub const REQUIRED_PALETTES: [&str; 6] = [
    "primary",
    "accent",
    "background",
    "warm",
    "neutral",
    "meditation",
];

/// Immutable table of named palettes
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    palettes: FxHashMap<String, Palette>,
    default: Palette,
}

impl PaletteRegistry {
    pub fn builder() -> PaletteRegistryBuilder {
        PaletteRegistryBuilder::new()
    }

    /// Build from the built-in palette configuration
    pub fn builtin() -> Result<Self> {
        Self::from_config(&PaletteConfig::builtin())
    }

    /// Build from a palette configuration
    pub fn from_config(config: &PaletteConfig) -> Result<Self> {
        let mut builder = Self::builder();
        for (key, base) in config.scale_entries() {
            builder = builder.scale(key, base);
        }
        for (id, colors) in &config.traditions {
            builder = builder.tradition(id, colors.clone());
        }
        builder.build()
    }

    /// Look up a palette by key
    ///
    /// Fails with [`ThemeError::UnknownPaletteKey`], which callers are
    /// expected to recover from with [`PaletteRegistry::lookup_or_default`].
    pub fn lookup(&self, key: &str) -> Result<&Palette> {
        self.palettes
            .get(key)
            .ok_or_else(|| ThemeError::UnknownPaletteKey(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Palette> {
        self.palettes.get(key)
    }

    /// Look up a palette, serving the default palette for unknown keys
    pub fn lookup_or_default(&self, key: &str) -> &Palette {
        match self.lookup(key) {
            Ok(palette) => palette,
            Err(err) => {
                tracing::debug!(%err, fallback = DEFAULT_PALETTE_KEY, "palette lookup fell back");
                &self.default
            }
        }
    }

    /// Main scale of a palette, or of the default palette for unknown keys
    pub fn scale(&self, key: &str) -> &ColorToken {
        self.lookup_or_default(key).scale()
    }

    /// A tradition's regional palette
    ///
    /// `None` for unknown ids and for keys naming a single-scale palette.
    pub fn tradition(&self, id: &str) -> Option<&RegionalPalette> {
        self.palettes.get(id).and_then(Palette::as_regional)
    }

    pub fn default_palette(&self) -> &Palette {
        &self.default
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.palettes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Tradition ids, sorted
    pub fn tradition_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .palettes
            .iter()
            .filter(|(_, palette)| palette.is_regional())
            .map(|(key, _)| key.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    // ========== Process-wide instance ==========

    /// Install the process-wide registry (once, at startup)
    pub fn install(registry: PaletteRegistry) -> Result<&'static PaletteRegistry> {
        let palettes = registry.len();
        REGISTRY
            .set(registry)
            .map_err(|_| ThemeError::AlreadyInstalled)?;
        tracing::info!(palettes, "palette registry installed");
        REGISTRY.get().ok_or(ThemeError::AlreadyInstalled)
    }

    /// The installed registry, building the built-in one if none was installed
    pub fn init_builtin() -> Result<&'static PaletteRegistry> {
        if let Some(registry) = REGISTRY.get() {
            return Ok(registry);
        }
        let registry = Self::builtin()?;
        // A concurrent initializer may have won the race; either value is valid
        let _ = REGISTRY.set(registry);
        REGISTRY.get().ok_or(ThemeError::AlreadyInstalled)
    }

    /// The installed registry (returns None if not installed yet)
    pub fn global() -> Option<&'static PaletteRegistry> {
        REGISTRY.get()
    }
}

enum PendingPalette {
    Scale(String),
    Tradition(TraditionColors),
}

/// Collects base colors and builds a validated registry
///
/// Nothing is parsed until [`PaletteRegistryBuilder::build`]; the first
/// failure aborts the whole build.
#[derive(Default)]
pub struct PaletteRegistryBuilder {
    pending: Vec<(String, PendingPalette)>,
}

impl PaletteRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single-scale palette from a base color
    pub fn scale(mut self, key: impl Into<String>, base: impl Into<String>) -> Self {
        self.pending
            .push((key.into(), PendingPalette::Scale(base.into())));
        self
    }

    /// Add a tradition's regional palette
    pub fn tradition(mut self, id: impl Into<String>, colors: TraditionColors) -> Self {
        self.pending
            .push((id.into(), PendingPalette::Tradition(colors)));
        self
    }

    pub fn build(self) -> Result<PaletteRegistry> {
        let mut palettes: FxHashMap<String, Palette> = FxHashMap::default();

        for (key, pending) in self.pending {
            if palettes.contains_key(&key) {
                return Err(ThemeError::DuplicatePaletteKey(key));
            }
            let palette = match pending {
                PendingPalette::Scale(base) => Palette::from(parse_scale(&key, &base)?),
                PendingPalette::Tradition(colors) => {
                    Palette::from(build_regional(&key, &colors)?)
                }
            };
            palettes.insert(key, palette);
        }

        for key in REQUIRED_PALETTES {
            if !palettes.contains_key(key) {
                return Err(ThemeError::MissingPalette(key.to_string()));
            }
        }

        let default = palettes
            .get(DEFAULT_PALETTE_KEY)
            .cloned()
            .ok_or_else(|| ThemeError::MissingPalette(DEFAULT_PALETTE_KEY.to_string()))?;

        tracing::info!(palettes = palettes.len(), "palette registry built");
        Ok(PaletteRegistry { palettes, default })
    }
}

fn parse_scale(key: &str, base: &str) -> Result<ColorToken> {
    scale::generate(base).map_err(|source| ThemeError::InvalidColor {
        key: key.to_string(),
        source,
    })
}

fn build_regional(id: &str, colors: &TraditionColors) -> Result<RegionalPalette> {
    let field = |name: &str, base: &str| parse_scale(&format!("{id}.{name}"), base);
    let text = Color::parse(&colors.text).map_err(|source| ThemeError::InvalidColor {
        key: format!("{id}.text"),
        source,
    })?;

    Ok(RegionalPalette {
        id: id.to_string(),
        primary: field("primary", &colors.primary)?,
        secondary: field("secondary", &colors.secondary)?,
        accent: field("accent", &colors.accent)?,
        background: field("background", &colors.background)?,
        text,
    })
}
