//! Shadow tokens

use tenang_core::{Color, Shadow};

use crate::registry::PaletteRegistry;

/// Every shadow the engine can emit
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowTier {
    None,
    Card,
    CardHover,
    Elevated,
    Floating,
    /// Meditation spiritual glow
    Glow,
    /// Meditation hover
    Focus,
    Hover,
    Active,
}

impl ShadowTier {
    pub const ALL: [ShadowTier; 9] = [
        ShadowTier::None,
        ShadowTier::Card,
        ShadowTier::CardHover,
        ShadowTier::Elevated,
        ShadowTier::Floating,
        ShadowTier::Glow,
        ShadowTier::Focus,
        ShadowTier::Hover,
        ShadowTier::Active,
    ];
}

crate::lenient_id! {
    /// Requested shadow depth
    pub enum ShadowId {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
    default = Sm;
}

impl ShadowId {
    /// Tier this id selects
    pub fn tier(self) -> ShadowTier {
        match self {
            ShadowId::None => ShadowTier::None,
            ShadowId::Sm => ShadowTier::Card,
            ShadowId::Md => ShadowTier::CardHover,
            ShadowId::Lg => ShadowTier::Elevated,
            ShadowId::Xl => ShadowTier::Floating,
        }
    }
}

/// Complete set of shadow tiers
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTable {
    pub card: Shadow,
    pub card_hover: Shadow,
    pub elevated: Shadow,
    pub floating: Shadow,
    pub glow: Shadow,
    pub focus: Shadow,
    pub hover: Shadow,
    pub active: Shadow,
}

impl ShadowTable {
    /// Tiers for light surfaces, with the glow and focus tiers in `meditation`
    pub fn new(meditation: Color) -> Self {
        let base_color = Color::BLACK;
        Self {
            card: Shadow::new(0.0, 1.0, 3.0, 0.0, base_color.with_alpha(0.08)),
            card_hover: Shadow::new(0.0, 4.0, 12.0, -2.0, base_color.with_alpha(0.1)),
            elevated: Shadow::new(0.0, 10.0, 24.0, -4.0, base_color.with_alpha(0.12)),
            floating: Shadow::new(0.0, 20.0, 40.0, -8.0, base_color.with_alpha(0.16)),
            glow: Shadow::new(0.0, 0.0, 24.0, 4.0, meditation.with_alpha(0.35)),
            focus: Shadow::new(0.0, 8.0, 28.0, -4.0, meditation.with_alpha(0.25)),
            hover: Shadow::new(0.0, 12.0, 28.0, -6.0, base_color.with_alpha(0.14)),
            active: Shadow::new(0.0, 2.0, 6.0, -1.0, base_color.with_alpha(0.12)),
        }
    }

    /// Tiers tinted with the registry's `meditation` palette
    pub fn for_registry(registry: &PaletteRegistry) -> Self {
        Self::new(registry.scale("meditation").base())
    }

    /// Get shadow by tier
    pub fn get(&self, tier: ShadowTier) -> Shadow {
        match tier {
            ShadowTier::None => Shadow::none(),
            ShadowTier::Card => self.card,
            ShadowTier::CardHover => self.card_hover,
            ShadowTier::Elevated => self.elevated,
            ShadowTier::Floating => self.floating,
            ShadowTier::Glow => self.glow,
            ShadowTier::Focus => self.focus,
            ShadowTier::Hover => self.hover,
            ShadowTier::Active => self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaletteConfig;

    #[test]
    fn test_shadow_ids_map_to_tiers() {
        assert_eq!(ShadowId::from_id("md").tier(), ShadowTier::CardHover);
        assert_eq!(ShadowId::from_id("xl").tier(), ShadowTier::Floating);
        assert_eq!(ShadowId::from_id("huge"), ShadowId::Sm);
        assert_eq!(ShadowId::default().tier(), ShadowTier::Card);
    }

    #[test]
    fn test_none_tier_is_empty() {
        let table = ShadowTable::new(Color::from_hex(0x7C6FB0));
        assert!(table.get(ShadowTier::None).is_none());
        for tier in &ShadowTier::ALL[1..] {
            assert!(!table.get(*tier).is_none(), "{tier:?}");
        }
    }

    #[test]
    fn test_meditation_tone_only_tints_meditation_tiers() {
        let tone = Color::from_hex(0x4F6DB8);
        let table = ShadowTable::new(tone);
        assert_eq!(table.glow.color, tone.with_alpha(0.35));
        assert_eq!(table.focus.color, tone.with_alpha(0.25));
        assert_eq!(table.card, ShadowTable::new(Color::WHITE).card);
    }

    #[test]
    fn test_registry_tone_follows_config() {
        let config = PaletteConfig::from_toml_str(
            r##"
            [meditation]
            meditation = "#2f8f6f"
            "##,
        )
        .unwrap();
        let registry = PaletteRegistry::from_config(&config).unwrap();
        let table = ShadowTable::for_registry(&registry);

        let tone = registry.scale("meditation").base();
        assert_eq!(tone, Color::from_hex(0x2F8F6F));
        assert_eq!(table.glow.color, tone.with_alpha(0.35));
        assert_eq!(table.focus.color, tone.with_alpha(0.25));

        let builtin = ShadowTable::for_registry(&PaletteRegistry::builtin().unwrap());
        assert_ne!(builtin.glow, table.glow);
    }
}
