//! Tenang Style Engine
//!
//! Resolves the final presentation of a themed surface from a
//! [`StyleIntent`] (tradition, variant, token ids, effect flags) and an
//! [`InteractionState`] (hover, pressed, focus, selection).
//!
//! # Pipeline
//!
//! ```text
//! StyleIntent ──► VariantStyleResolver ──► base ComposedStyle
//!                                               │
//! InteractionState ──► StateOverlayCompositor ◄─┘
//!                               │
//!                breathing ──► ComposedStyle
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tenang_style::{InteractionState, StyleEngine, StyleIntent};
//! use tenang_theme::PaletteRegistry;
//!
//! let registry = PaletteRegistry::builtin().unwrap();
//! let engine = StyleEngine::new(&registry);
//!
//! let intent = StyleIntent::new()
//!     .tradition("javanese")
//!     .variant("cultural")
//!     .cultural_pattern(true)
//!     .clickable(true);
//! let style = engine.resolve(&intent, &InteractionState::new().focused(true));
//!
//! let accent = registry.tradition("javanese").unwrap().accent_color();
//! assert_eq!(style.outline.unwrap().color, accent);
//! ```
//!
//! Unknown variant, size, padding and shadow ids resolve to their defaults,
//! and an unregistered tradition behaves exactly like no tradition.

pub mod composed;
pub mod engine;
pub mod intent;
pub mod overlay;
pub mod state;
pub mod variant;

pub use composed::{ComposedStyle, Outline, PatternOverlay, SelectionIndicator, StyleOverlay, Transform};
pub use engine::StyleEngine;
pub use intent::{StyleIntent, VariantId};
pub use overlay::{OverlayStage, StateOverlayCompositor};
pub use state::InteractionState;
pub use variant::VariantStyleResolver;
