//! Style engine
//!
//! Entry point for renderers: intent and interaction state in, composed
//! style out. Every call is independent and synchronous; nothing is cached
//! and the engine only reads the registry, so one engine can serve any
//! number of threads.

use tenang_animation::BreathingState;
use tenang_theme::PaletteRegistry;

use crate::composed::ComposedStyle;
use crate::intent::StyleIntent;
use crate::overlay::StateOverlayCompositor;
use crate::state::InteractionState;
use crate::variant::VariantStyleResolver;

/// Resolves composed styles against a palette registry
#[derive(Clone, Debug)]
pub struct StyleEngine<'a> {
    compositor: StateOverlayCompositor<'a>,
}

impl<'a> StyleEngine<'a> {
    pub fn new(registry: &'a PaletteRegistry) -> Self {
        Self {
            compositor: StateOverlayCompositor::from_resolver(VariantStyleResolver::new(registry)),
        }
    }

    pub fn registry(&self) -> &'a PaletteRegistry {
        self.compositor.resolver().registry()
    }

    /// Full pipeline: variant, interaction overlays, then breathing
    pub fn resolve(&self, intent: &StyleIntent, state: &InteractionState) -> ComposedStyle {
        let base = self.resolve_base(intent);
        let mut style = self.compositor.apply_state(&base, state, intent);

        // The pulse rides on the hover lift only when the lift survives;
        // a press replaces it with the pressed transform
        let lifted = state.hover_applies(intent) && !state.press_applies(intent);
        let breathing = BreathingState::from_flag(intent.breathing);
        style.animation = breathing.animation(lifted);
        style
    }

    /// Base style at rest (no overlays, no animation)
    pub fn resolve_base(&self, intent: &StyleIntent) -> ComposedStyle {
        self.compositor.resolver().resolve(intent)
    }

    /// Apply interaction overlays to a previously resolved base style
    pub fn apply_state(
        &self,
        base: &ComposedStyle,
        state: &InteractionState,
        intent: &StyleIntent,
    ) -> ComposedStyle {
        self.compositor.apply_state(base, state, intent)
    }
}

impl StyleEngine<'static> {
    /// Engine over the process-wide registry
    ///
    /// Installs the built-in registry first if none was installed.
    pub fn global() -> tenang_theme::Result<Self> {
        PaletteRegistry::init_builtin().map(Self::new)
    }
}
