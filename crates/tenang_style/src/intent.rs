//! Style intents
//!
//! A [`StyleIntent`] is what a caller asks for: a tradition, a variant, the
//! token ids for size, padding and shadow, and the effect flags. It is
//! built fresh for every resolution and never stored by the engine.

use serde::{Deserialize, Serialize};
use tenang_theme::{PaddingId, PaletteRegistry, RegionalPalette, ShadowId, SizeId};

tenang_theme::lenient_id! {
    /// Generic presentation mode of a surface
    pub enum VariantId {
        Default => "default",
        Meditation => "meditation",
        Cultural => "cultural",
        Elevated => "elevated",
        Glass => "glass",
        Minimal => "minimal",
    }
    default = Default;
}

/// Requested presentation of one surface
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleIntent {
    /// Cultural tradition; ids the registry does not know are ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradition: Option<String>,
    pub variant: VariantId,
    pub size: SizeId,
    pub padding: PaddingId,
    pub shadow: ShadowId,
    /// Two-stop gradient background instead of a flat tone
    pub gradient: bool,
    pub cultural_pattern: bool,
    /// Glow shadow for the meditation variant
    pub spiritual_glow: bool,
    pub breathing: bool,
    /// Surface reacts to pointer hover
    pub hoverable: bool,
    /// Surface reacts to presses (implies hover reactions)
    pub clickable: bool,
}

impl StyleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn tradition(mut self, id: impl Into<String>) -> Self {
        self.tradition = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<VariantId>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn size(mut self, size: impl Into<SizeId>) -> Self {
        self.size = size.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<PaddingId>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn shadow(mut self, shadow: impl Into<ShadowId>) -> Self {
        self.shadow = shadow.into();
        self
    }

    pub fn gradient(mut self, enabled: bool) -> Self {
        self.gradient = enabled;
        self
    }

    pub fn cultural_pattern(mut self, enabled: bool) -> Self {
        self.cultural_pattern = enabled;
        self
    }

    pub fn spiritual_glow(mut self, enabled: bool) -> Self {
        self.spiritual_glow = enabled;
        self
    }

    pub fn breathing(mut self, enabled: bool) -> Self {
        self.breathing = enabled;
        self
    }

    pub fn hoverable(mut self, enabled: bool) -> Self {
        self.hoverable = enabled;
        self
    }

    pub fn clickable(mut self, enabled: bool) -> Self {
        self.clickable = enabled;
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The tradition's palette, if one is requested and registered
    ///
    /// An unregistered id resolves exactly like no tradition at all.
    pub fn tradition_in<'r>(&self, registry: &'r PaletteRegistry) -> Option<&'r RegionalPalette> {
        let id = self.tradition.as_deref()?;
        let regional = registry.tradition(id);
        if regional.is_none() {
            tracing::debug!(tradition = id, "unknown tradition, using variant styling");
        }
        regional
    }

    /// Whether the surface reacts to hover at all
    pub fn reacts_to_hover(&self) -> bool {
        self.hoverable || self.clickable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let intent = StyleIntent::new();
        assert_eq!(intent.variant, VariantId::Default);
        assert_eq!(intent.size, SizeId::Md);
        assert_eq!(intent.padding, PaddingId::Md);
        assert_eq!(intent.shadow, ShadowId::Sm);
        assert!(!intent.reacts_to_hover());
    }

    #[test]
    fn test_unknown_variant_is_default() {
        assert_eq!(VariantId::from_id("neon"), VariantId::Default);
        assert_eq!(StyleIntent::new().variant("neon").variant, VariantId::Default);
        assert_eq!(VariantId::from_id(" Glass "), VariantId::Glass);
    }

    #[test]
    fn test_deserializes_leniently() {
        let intent: StyleIntent = serde_json::from_str(
            r#"{ "tradition": "javanese", "variant": "holographic", "shadow": "lg", "clickable": true }"#,
        )
        .unwrap();

        assert_eq!(intent.tradition.as_deref(), Some("javanese"));
        assert_eq!(intent.variant, VariantId::Default);
        assert_eq!(intent.shadow, ShadowId::Lg);
        assert!(intent.reacts_to_hover());
        assert!(!intent.gradient);
    }

    #[test]
    fn test_unknown_tradition_resolves_to_none() {
        let registry = PaletteRegistry::builtin().unwrap();
        assert!(StyleIntent::new().tradition("atlantis").tradition_in(&registry).is_none());
        assert!(StyleIntent::new().tradition_in(&registry).is_none());
        assert_eq!(
            StyleIntent::new()
                .tradition("sundanese")
                .tradition_in(&registry)
                .map(|palette| palette.id.as_str()),
            Some("sundanese")
        );
    }
}
