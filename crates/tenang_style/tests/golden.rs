//! Golden-value regressions for resolved styles

use tenang_core::{Brush, Color, Shadow};
use tenang_style::{InteractionState, StyleEngine, StyleIntent};
use tenang_theme::{PaletteRegistry, ShadowId, ShadowTier};

fn registry() -> PaletteRegistry {
    PaletteRegistry::builtin().unwrap()
}

#[test]
fn default_variant_with_md_shadow() {
    let registry = registry();
    let engine = StyleEngine::new(&registry);
    let intent = StyleIntent::new()
        .variant("default")
        .shadow("md")
        .gradient(false);

    let style = engine.resolve_base(&intent);

    assert_eq!(style.background, Brush::solid(Color::from_hex(0xFDFCFA)));
    assert_eq!(
        style.shadow,
        Shadow::new(0.0, 4.0, 12.0, -2.0, Color::BLACK.with_alpha(0.1))
    );
    assert_eq!(ShadowId::Md.tier(), ShadowTier::CardHover);
}

#[test]
fn javanese_focus_outline_uses_tradition_accent() {
    let registry = registry();
    let engine = StyleEngine::new(&registry);
    let intent = StyleIntent::new()
        .tradition("javanese")
        .variant("cultural")
        .cultural_pattern(true);

    let base = engine.resolve_base(&intent);
    let focused = engine.apply_state(&base, &InteractionState::new().focused(true), &intent);

    let outline = focused.outline.unwrap();
    assert_eq!(outline.color, Color::from_hex(0xC9A227));
    assert_ne!(outline.color, registry.scale("primary").base());
    assert_eq!((outline.width, outline.offset), (2.0, 2.0));
    assert_eq!(focused.cultural_pattern.unwrap().motif, "javanese");
}

#[test]
fn unknown_tradition_matches_no_tradition() {
    let registry = registry();
    let engine = StyleEngine::new(&registry);
    let states = [
        InteractionState::new(),
        InteractionState::new().hovered(true).focused(true),
        InteractionState::new().pressed(true).selected(true),
    ];

    for variant in tenang_style::VariantId::ALL {
        let without = StyleIntent::new().variant(*variant).clickable(true).gradient(true);
        let atlantis = without.clone().tradition("atlantis");
        for state in &states {
            assert_eq!(
                engine.resolve(&atlantis, state),
                engine.resolve(&without, state),
                "{variant} {state:?}"
            );
        }
    }
}

#[test]
fn pressed_and_hovered_resolves_to_pressed() {
    let registry = registry();
    let engine = StyleEngine::new(&registry);
    let intent = StyleIntent::new().clickable(true);

    let both = engine.resolve(&intent, &InteractionState::new().hovered(true).pressed(true));
    let pressed = engine.resolve(&intent, &InteractionState::new().pressed(true));

    assert_eq!(both.transform, pressed.transform);
    assert_eq!(both.shadow, pressed.shadow);
    assert_eq!(both.transform.translate_y, 1.0);
}

#[test]
fn composed_style_json_shape() {
    let registry = registry();
    let engine = StyleEngine::new(&registry);
    let style = engine.resolve(
        &StyleIntent::new().variant("glass").size("full").breathing(true),
        &InteractionState::new(),
    );

    let json = serde_json::to_value(&style).unwrap();
    assert_eq!(json["background"]["color"], "rgba(255, 255, 255, 0.7)");
    assert_eq!(json["backdrop_blur"], 12.0);
    assert!(json["max_width"].is_null());
    assert_eq!(json["animation"]["name"], "breathing");
    assert_eq!(json["animation"]["duration_ms"], 4000);
}
