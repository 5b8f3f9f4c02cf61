//! Variant style resolution
//!
//! Turns a [`StyleIntent`] into the base [`ComposedStyle`] of a surface at
//! rest. Precedence, highest first:
//!
//! 1. A registered tradition: background, border, text and shadow all come
//!    from the tradition's regional palette; the variant is ignored for color.
//! 2. The variant recipe (`default`, `meditation`, `cultural`, `elevated`,
//!    `glass`, `minimal`).
//!
//! Size and padding are independent table lookups. The shadow comes from the
//! shadow id, except that the meditation variant with spiritual glow always
//! gets the glow tier.

use tenang_core::{Brush, Color, CornerRadius, LinearGradient, Shadow};
use tenang_theme::{PaletteRegistry, RegionalPalette, ScaleStep, ShadowTable, ShadowTier};

use crate::composed::{ComposedStyle, PatternOverlay};
use crate::intent::{StyleIntent, VariantId};

/// Angle of every background gradient (top-left to bottom-right)
pub const GRADIENT_ANGLE: f32 = 135.0;

/// Opacity of the accent tint at the far end of a gradient
pub const GRADIENT_TINT_ALPHA: f32 = 0.1;

/// Opacity of a tradition's accent on its border
const TRADITION_BORDER_ALPHA: f32 = 0.3;

/// Opacity of a cultural motif overlay
const PATTERN_OPACITY: f32 = 0.08;

const DEFAULT_RADIUS: f32 = 16.0;

/// Color recipe of one variant
#[derive(Clone, Copy, Debug, PartialEq)]
struct VariantRecipe {
    /// Flat background
    surface: Color,
    /// Lightest relevant tone (gradient start)
    lightest: Color,
    /// Accent tone (gradient end, tinted)
    accent: Color,
    border: Color,
    text: Color,
    backdrop_blur: Option<f32>,
    radius: f32,
}

/// Resolves intents to base styles against a palette registry
#[derive(Clone, Debug)]
pub struct VariantStyleResolver<'a> {
    registry: &'a PaletteRegistry,
    shadows: ShadowTable,
}

impl<'a> VariantStyleResolver<'a> {
    pub fn new(registry: &'a PaletteRegistry) -> Self {
        Self {
            registry,
            shadows: ShadowTable::for_registry(registry),
        }
    }

    pub fn registry(&self) -> &'a PaletteRegistry {
        self.registry
    }

    pub fn shadows(&self) -> &ShadowTable {
        &self.shadows
    }

    /// Base style of a surface at rest
    pub fn resolve(&self, intent: &StyleIntent) -> ComposedStyle {
        let mut style = match intent.tradition_in(self.registry) {
            Some(regional) => self.tradition_style(regional, intent),
            None => self.variant_style(intent),
        };

        style.padding = intent.padding.padding();
        style.max_width = intent.size.max_width();

        tracing::trace!(
            tradition = intent.tradition.as_deref(),
            variant = %intent.variant,
            shadow = %intent.shadow,
            gradient = intent.gradient,
            "resolved base style"
        );
        style
    }

    fn tradition_style(&self, regional: &RegionalPalette, intent: &StyleIntent) -> ComposedStyle {
        let accent = regional.accent_color();
        let background = if intent.gradient {
            gradient(regional.lightest(), accent)
        } else {
            Brush::solid(regional.background.base())
        };
        let shadow = self.tradition_shadow(regional, intent.shadow.tier());

        let cultural_pattern = intent.cultural_pattern.then(|| PatternOverlay {
            motif: regional.id.clone(),
            color: accent,
            opacity: PATTERN_OPACITY,
        });

        ComposedStyle {
            background,
            border_color: accent.with_alpha(TRADITION_BORDER_ALPHA),
            text_color: regional.text,
            shadow,
            border_radius: CornerRadius::uniform(DEFAULT_RADIUS),
            cultural_pattern,
            ..ComposedStyle::default()
        }
    }

    fn variant_style(&self, intent: &StyleIntent) -> ComposedStyle {
        let recipe = self.recipe(intent.variant);
        let background = if intent.gradient {
            gradient(recipe.lightest, recipe.accent)
        } else {
            Brush::solid(recipe.surface)
        };

        let tier = if intent.variant == VariantId::Meditation && intent.spiritual_glow {
            ShadowTier::Glow
        } else {
            intent.shadow.tier()
        };

        let cultural_pattern = (intent.variant == VariantId::Cultural && intent.cultural_pattern)
            .then(|| PatternOverlay {
                motif: "warm".to_string(),
                color: recipe.accent,
                opacity: PATTERN_OPACITY,
            });

        ComposedStyle {
            background,
            border_color: recipe.border,
            text_color: recipe.text,
            shadow: self.shadows.get(tier),
            backdrop_blur: recipe.backdrop_blur,
            border_radius: CornerRadius::uniform(recipe.radius),
            cultural_pattern,
            ..ComposedStyle::default()
        }
    }

    fn recipe(&self, variant: VariantId) -> VariantRecipe {
        let registry = self.registry;
        let neutral = registry.scale("neutral");
        let primary = registry.scale("primary").base();

        let base = VariantRecipe {
            surface: registry.scale("background").base(),
            lightest: registry.scale("background").get(ScaleStep::S50),
            accent: primary,
            border: neutral.get(ScaleStep::S200),
            text: neutral.get(ScaleStep::S900),
            backdrop_blur: None,
            radius: DEFAULT_RADIUS,
        };

        match variant {
            VariantId::Default => base,
            VariantId::Meditation => {
                let meditation = registry.scale("meditation");
                VariantRecipe {
                    surface: meditation.get(ScaleStep::S50),
                    lightest: meditation.get(ScaleStep::S50),
                    accent: meditation.base(),
                    border: meditation.get(ScaleStep::S200),
                    text: meditation.get(ScaleStep::S900),
                    ..base
                }
            }
            VariantId::Cultural => {
                let warm = registry.scale("warm");
                VariantRecipe {
                    surface: warm.get(ScaleStep::S50),
                    lightest: warm.get(ScaleStep::S50),
                    accent: warm.base(),
                    border: warm.get(ScaleStep::S200),
                    text: warm.get(ScaleStep::S900),
                    ..base
                }
            }
            VariantId::Elevated => VariantRecipe {
                surface: Color::WHITE,
                lightest: Color::WHITE,
                accent: registry.scale("accent").base(),
                border: neutral.get(ScaleStep::S100),
                ..base
            },
            VariantId::Glass => VariantRecipe {
                surface: Color::WHITE.with_alpha(0.7),
                lightest: Color::WHITE.with_alpha(0.7),
                border: Color::WHITE.with_alpha(0.2),
                backdrop_blur: Some(12.0),
                radius: 20.0,
                ..base
            },
            VariantId::Minimal => VariantRecipe {
                surface: Color::TRANSPARENT,
                lightest: Color::TRANSPARENT,
                border: neutral.get(ScaleStep::S100),
                text: neutral.get(ScaleStep::S800),
                radius: 8.0,
                ..base
            },
        }
    }

    /// Shadow tier tinted with a tradition's primary tone
    pub(crate) fn tradition_shadow(&self, regional: &RegionalPalette, tier: ShadowTier) -> Shadow {
        self.shadows.get(tier).tinted(regional.primary.base())
    }
}

fn gradient(from: Color, accent: Color) -> Brush {
    Brush::LinearGradient(LinearGradient::two_stop(
        GRADIENT_ANGLE,
        from,
        accent.with_alpha(GRADIENT_TINT_ALPHA),
    ))
}
