//! Palette configuration (palette.toml)
//!
//! Lists every base color the registry is built from. Colors stay as
//! strings here; they are parsed when the registry is built so a bad value
//! fails construction with the palette key attached.
//!
//! ```toml
//! [brand]
//! primary = "#5b8a72"
//!
//! [meditation]
//! meditation = "#7c6fb0"
//!
//! [traditions.javanese]
//! primary = "#8b5a2b"
//! secondary = "#3e2a1e"
//! accent = "#c9a227"
//! background = "#fbf6ec"
//! text = "#2b1d12"
//! ```
//!
//! Omitted sections and fields keep the built-in values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Top-level palette configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub brand: BrandColors,
    pub meditation: MeditationColors,
    pub semantic: SemanticColors,
    pub traditions: BTreeMap<String, TraditionColors>,
}

/// Brand base colors
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrandColors {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub warm: String,
    pub neutral: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#5b8a72".to_string(),
            accent: "#e0a458".to_string(),
            background: "#fdfcfa".to_string(),
            warm: "#d9825b".to_string(),
            neutral: "#78716c".to_string(),
        }
    }
}

/// Meditation-state colors
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MeditationColors {
    /// Main meditation tone (a soft lavender)
    pub meditation: String,
    pub calm: String,
    pub focus: String,
    pub energy: String,
}

impl Default for MeditationColors {
    fn default() -> Self {
        Self {
            meditation: "#7c6fb0".to_string(),
            calm: "#6fa3b0".to_string(),
            focus: "#4f6db8".to_string(),
            energy: "#e3b04b".to_string(),
        }
    }
}

/// Status colors
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SemanticColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            success: "#4caf7a".to_string(),
            warning: "#e0a13a".to_string(),
            error: "#d0554b".to_string(),
            info: "#4a90c2".to_string(),
        }
    }
}

/// Base colors of one cultural tradition
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TraditionColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl TraditionColors {
    fn new(primary: &str, secondary: &str, accent: &str, background: &str, text: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

fn default_traditions() -> BTreeMap<String, TraditionColors> {
    BTreeMap::from([
        (
            "javanese".to_string(),
            TraditionColors::new("#8b5a2b", "#3e2a1e", "#c9a227", "#fbf6ec", "#2b1d12"),
        ),
        (
            "balinese".to_string(),
            TraditionColors::new("#b5472f", "#2f4f3a", "#e0b13a", "#fff8ee", "#2e1a14"),
        ),
        (
            "sundanese".to_string(),
            TraditionColors::new("#2f6b4f", "#6b4e2e", "#9cc27a", "#f5faf3", "#1c2b22"),
        ),
        (
            "minangkabau".to_string(),
            TraditionColors::new("#8e1f2f", "#1f1a17", "#d4a017", "#fcf5ea", "#2a1215"),
        ),
    ])
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteConfig {
    /// The built-in brand, meditation, semantic and tradition colors
    pub fn builtin() -> Self {
        Self {
            brand: BrandColors::default(),
            meditation: MeditationColors::default(),
            semantic: SemanticColors::default(),
            traditions: default_traditions(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a palette file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            traditions = config.traditions.len(),
            "loaded palette config"
        );
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Every single-scale palette as (key, base color)
    pub fn scale_entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", self.brand.primary.as_str()),
            ("accent", self.brand.accent.as_str()),
            ("background", self.brand.background.as_str()),
            ("warm", self.brand.warm.as_str()),
            ("neutral", self.brand.neutral.as_str()),
            ("meditation", self.meditation.meditation.as_str()),
            ("calm", self.meditation.calm.as_str()),
            ("focus", self.meditation.focus.as_str()),
            ("energy", self.meditation.energy.as_str()),
            ("success", self.semantic.success.as_str()),
            ("warning", self.semantic.warning.as_str()),
            ("error", self.semantic.error.as_str()),
            ("info", self.semantic.info.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(PaletteConfig::default(), PaletteConfig::builtin());
        assert_eq!(PaletteConfig::builtin().traditions.len(), 4);
    }

    #[test]
    fn test_partial_toml_keeps_builtin_values() {
        let config = PaletteConfig::from_toml_str(
            r##"
            [brand]
            primary = "#336699"
            "##,
        )
        .unwrap();

        assert_eq!(config.brand.primary, "#336699");
        assert_eq!(config.brand.accent, BrandColors::default().accent);
        assert_eq!(config.meditation, MeditationColors::default());
        assert!(config.traditions.contains_key("javanese"));
    }

    #[test]
    fn test_traditions_section_replaces_builtin_set() {
        let config = PaletteConfig::from_toml_str(
            r##"
            [traditions.toraja]
            primary = "#7a2e1d"
            secondary = "#111111"
            accent = "#e8c15a"
            background = "#fbf3e8"
            text = "#1e1410"
            "##,
        )
        .unwrap();

        let ids: Vec<&str> = config.traditions.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["toraja"]);
    }

    #[test]
    fn test_incomplete_tradition_is_a_config_error() {
        let err = PaletteConfig::from_toml_str(
            r##"
            [traditions.toraja]
            primary = "#7a2e1d"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PaletteConfig::builtin();
        let text = config.to_toml().unwrap();
        assert_eq!(PaletteConfig::from_toml_str(&text).unwrap(), config);
    }
}
