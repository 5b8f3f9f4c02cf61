//! Named palettes
//!
//! A palette is either a single tonal scale (brand, meditation and semantic
//! colors) or a regional palette: the related scales that make up one
//! cultural tradition's look.

use serde::Serialize;
use tenang_core::Color;

use crate::scale::{ColorToken, ScaleStep};

/// A tradition's dedicated colors
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionalPalette {
    pub id: String,
    /// Dominant tone: text, shadows and borders derive from it
    pub primary: ColorToken,
    pub secondary: ColorToken,
    /// Highlight tone: hover washes, focus rings, selection markers
    pub accent: ColorToken,
    /// Neutral surface tone
    pub background: ColorToken,
    pub text: Color,
}

impl RegionalPalette {
    /// The accent base color
    pub fn accent_color(&self) -> Color {
        self.accent.base()
    }

    /// The lightest surface tone
    pub fn lightest(&self) -> Color {
        self.background.get(ScaleStep::S50)
    }
}

/// A registered palette
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Palette {
    Scale { scale: ColorToken },
    Regional(RegionalPalette),
}

impl Palette {
    /// The palette's main scale (a regional palette's primary)
    pub fn scale(&self) -> &ColorToken {
        match self {
            Palette::Scale { scale } => scale,
            Palette::Regional(regional) => &regional.primary,
        }
    }

    pub fn as_regional(&self) -> Option<&RegionalPalette> {
        match self {
            Palette::Regional(regional) => Some(regional),
            Palette::Scale { .. } => None,
        }
    }

    pub fn is_regional(&self) -> bool {
        matches!(self, Palette::Regional(_))
    }
}

impl From<ColorToken> for Palette {
    fn from(scale: ColorToken) -> Self {
        Palette::Scale { scale }
    }
}

impl From<RegionalPalette> for Palette {
    fn from(regional: RegionalPalette) -> Self {
        Palette::Regional(regional)
    }
}
