//! Tenang Theme System
//!
//! Tonal color scales, the palette registry, and the design tokens the
//! style engine resolves against.
//!
//! # Overview
//!
//! - **Scales**: one authored base color expands into an 11-step tonal
//!   scale ([`scale::generate`])
//! - **Palettes**: brand, meditation and semantic scales plus per-tradition
//!   regional palettes, held by an immutable [`PaletteRegistry`]
//! - **Tokens**: shadow tiers, size and padding tables
//! - **Configuration**: every base color can be overridden from a
//!   `palette.toml` ([`PaletteConfig`])
//!
//! # Quick Start
//!
//! ```rust
//! use tenang_theme::{PaletteRegistry, ScaleStep};
//!
//! // Build and install once at startup
//! let registry = PaletteRegistry::init_builtin().unwrap();
//!
//! // Read from anywhere afterwards
//! let meditation = registry.scale("meditation");
//! let soft = meditation.get(ScaleStep::S100);
//! # let _ = soft;
//! ```
//!
//! # Errors
//!
//! A bad base color or a missing required palette fails construction; no
//! partially built registry is ever served. Lookups of unknown keys are
//! recoverable and resolve to the default palette.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod palette;
pub mod registry;
pub mod scale;
pub mod tokens;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use tracing;
}

// Re-export commonly used types
pub use config::{BrandColors, MeditationColors, PaletteConfig, SemanticColors, TraditionColors};
pub use error::{Result, ThemeError};
pub use palette::{Palette, RegionalPalette};
pub use registry::{PaletteRegistry, PaletteRegistryBuilder, DEFAULT_PALETTE_KEY, REQUIRED_PALETTES};
pub use scale::{ColorToken, ScaleStep};
pub use tokens::{PaddingId, ShadowId, ShadowTable, ShadowTier, SizeId};
