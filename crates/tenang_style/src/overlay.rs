//! Interaction overlays
//!
//! Interaction states are applied as an ordered pipeline of overlays onto a
//! copy of the base style. Each stage contributes a [`StyleOverlay`]; later
//! stages win for the fields they set:
//!
//! ```text
//! base ──► hover ──► pressed ──► focus ──► selected ──► final
//! ```
//!
//! - **hover**: hovered surfaces that react to hover lift up and take the
//!   hover shadow. Traditions wash the background with their accent; the
//!   meditation variant takes the focus shadow and a lavender background.
//! - **pressed**: pressed clickable surfaces sink below rest and take the
//!   active shadow, overriding hover's transform and shadow.
//! - **focus**: an outline in the tradition accent, else the meditation
//!   tone for the meditation variant, else the primary tone.
//! - **selected**: a separate selection marker; base fields are untouched.

use tenang_animation::HOVER_LIFT;
use tenang_core::{Brush, Color, Shadow};
use tenang_theme::{PaletteRegistry, RegionalPalette, ScaleStep, ShadowTier};

use crate::composed::{ComposedStyle, Outline, SelectionIndicator, StyleOverlay, Transform};
use crate::intent::{StyleIntent, VariantId};
use crate::state::InteractionState;
use crate::variant::VariantStyleResolver;

/// Transform of a pressed surface
pub const PRESSED_TRANSFORM: Transform = Transform::new(1.0, 0.98);

/// Opacity of a tradition's accent wash on hover
const TRADITION_HOVER_ALPHA: f32 = 0.15;

const OUTLINE_WIDTH: f32 = 2.0;
const OUTLINE_OFFSET: f32 = 2.0;
const SELECTION_THICKNESS: f32 = 3.0;

/// One step of the overlay pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayStage {
    Hover,
    Pressed,
    Focus,
    Selected,
}

impl OverlayStage {
    /// Application order; later stages take precedence
    pub const PIPELINE: [OverlayStage; 4] = [
        OverlayStage::Hover,
        OverlayStage::Pressed,
        OverlayStage::Focus,
        OverlayStage::Selected,
    ];
}

/// Applies interaction-state overlays onto base styles
#[derive(Clone, Debug)]
pub struct StateOverlayCompositor<'a> {
    resolver: VariantStyleResolver<'a>,
}

impl<'a> StateOverlayCompositor<'a> {
    pub fn new(registry: &'a PaletteRegistry) -> Self {
        Self {
            resolver: VariantStyleResolver::new(registry),
        }
    }

    pub(crate) fn from_resolver(resolver: VariantStyleResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &VariantStyleResolver<'a> {
        &self.resolver
    }

    /// The base style with every active overlay applied
    ///
    /// Pure: `base` is not modified and equal arguments give equal results.
    pub fn apply_state(
        &self,
        base: &ComposedStyle,
        state: &InteractionState,
        intent: &StyleIntent,
    ) -> ComposedStyle {
        let overlay = self.overlay(state, intent);
        base.with_overlay(&overlay)
    }

    /// Merge of every active stage's overlay, in pipeline order
    pub fn overlay(&self, state: &InteractionState, intent: &StyleIntent) -> StyleOverlay {
        let tradition = intent.tradition_in(self.resolver.registry());

        OverlayStage::PIPELINE
            .iter()
            .filter_map(|stage| self.stage_overlay(*stage, state, intent, tradition))
            .fold(StyleOverlay::new(), |merged, overlay| merged.merge(&overlay))
    }

    /// Overlay of a single stage, or `None` when the stage is inactive
    pub fn stage_overlay(
        &self,
        stage: OverlayStage,
        state: &InteractionState,
        intent: &StyleIntent,
        tradition: Option<&RegionalPalette>,
    ) -> Option<StyleOverlay> {
        let overlay = match stage {
            OverlayStage::Hover if state.hover_applies(intent) => self.hover(intent, tradition),
            OverlayStage::Pressed if state.press_applies(intent) => self.pressed(tradition),
            OverlayStage::Focus if state.focused => self.focus(intent, tradition),
            OverlayStage::Selected if state.selected => self.selected(tradition),
            _ => return None,
        };
        tracing::trace!(?stage, "overlay stage active");
        Some(overlay)
    }

    fn hover(&self, intent: &StyleIntent, tradition: Option<&RegionalPalette>) -> StyleOverlay {
        let overlay = StyleOverlay::new().transform(Transform::lift(HOVER_LIFT));

        match tradition {
            Some(regional) => overlay
                .bg(regional
                    .accent_color()
                    .with_alpha(TRADITION_HOVER_ALPHA))
                .shadow(self.resolver.tradition_shadow(regional, ShadowTier::Hover)),
            None if intent.variant == VariantId::Meditation => {
                let meditation = self.resolver.registry().scale("meditation");
                overlay
                    .bg(Brush::solid(meditation.get(ScaleStep::S100)))
                    .shadow(self.tier(ShadowTier::Focus))
            }
            None => overlay.shadow(self.tier(ShadowTier::Hover)),
        }
    }

    fn pressed(&self, tradition: Option<&RegionalPalette>) -> StyleOverlay {
        let shadow = match tradition {
            Some(regional) => self.resolver.tradition_shadow(regional, ShadowTier::Active),
            None => self.tier(ShadowTier::Active),
        };
        StyleOverlay::new()
            .transform(PRESSED_TRANSFORM)
            .shadow(shadow)
    }

    fn focus(&self, intent: &StyleIntent, tradition: Option<&RegionalPalette>) -> StyleOverlay {
        let color = match tradition {
            Some(regional) => regional.accent_color(),
            None if intent.variant == VariantId::Meditation => {
                self.resolver.registry().scale("meditation").base()
            }
            None => self.primary(),
        };
        StyleOverlay::new().outline(Outline {
            width: OUTLINE_WIDTH,
            offset: OUTLINE_OFFSET,
            color,
        })
    }

    fn selected(&self, tradition: Option<&RegionalPalette>) -> StyleOverlay {
        let color = tradition
            .map(RegionalPalette::accent_color)
            .unwrap_or_else(|| self.primary());
        StyleOverlay::new().selection_indicator(SelectionIndicator {
            color,
            thickness: SELECTION_THICKNESS,
        })
    }

    fn tier(&self, tier: ShadowTier) -> Shadow {
        self.resolver.shadows().get(tier)
    }

    fn primary(&self) -> Color {
        self.resolver.registry().scale("primary").base()
    }
}
