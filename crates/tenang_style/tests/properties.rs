use proptest::prelude::*;
use tenang_style::{InteractionState, StyleEngine, StyleIntent, VariantId};
use tenang_theme::{PaddingId, PaletteRegistry, ShadowId, ShadowTier, SizeId};

fn registry() -> &'static PaletteRegistry {
    PaletteRegistry::init_builtin().unwrap()
}

fn arb_variant() -> impl Strategy<Value = VariantId> {
    prop::sample::select(VariantId::ALL.to_vec())
}

fn arb_shadow() -> impl Strategy<Value = ShadowId> {
    prop::sample::select(ShadowId::ALL.to_vec())
}

fn arb_intent() -> impl Strategy<Value = StyleIntent> {
    (
        arb_variant(),
        arb_shadow(),
        prop::sample::select(SizeId::ALL.to_vec()),
        prop::sample::select(PaddingId::ALL.to_vec()),
        any::<[bool; 7]>(),
    )
        .prop_map(|(variant, shadow, size, padding, flags)| StyleIntent {
            tradition: flags[6].then(|| "balinese".to_string()),
            variant,
            size,
            padding,
            shadow,
            gradient: flags[0],
            cultural_pattern: flags[1],
            spiritual_glow: flags[2],
            breathing: flags[3],
            hoverable: flags[4],
            clickable: flags[5],
        })
}

fn arb_state() -> impl Strategy<Value = InteractionState> {
    any::<[bool; 5]>().prop_map(|[hovered, pressed, focused, selected, interactive]| {
        InteractionState {
            hovered,
            pressed,
            focused,
            selected,
            interactive,
        }
    })
}

proptest! {
    #[test]
    fn tradition_ignores_variant_colors(
        tradition in prop::sample::select(vec!["javanese", "balinese", "sundanese", "minangkabau"]),
        a in arb_variant(),
        b in arb_variant(),
        gradient in any::<bool>(),
        glow in any::<bool>(),
    ) {
        let engine = StyleEngine::new(registry());
        let intent = |variant: VariantId| {
            StyleIntent::new()
                .tradition(tradition)
                .variant(variant)
                .gradient(gradient)
                .spiritual_glow(glow)
        };

        let first = engine.resolve_base(&intent(a));
        let second = engine.resolve_base(&intent(b));
        prop_assert_eq!(&first.background, &second.background);
        prop_assert_eq!(first.border_color, second.border_color);
        prop_assert_eq!(first.text_color, second.text_color);
    }

    #[test]
    fn meditation_glow_overrides_shadow_id(shadow in arb_shadow()) {
        let engine = StyleEngine::new(registry());
        let glow = tenang_theme::ShadowTable::for_registry(registry()).get(ShadowTier::Glow);

        let intent = StyleIntent::new()
            .variant(VariantId::Meditation)
            .spiritual_glow(true)
            .shadow(shadow);
        prop_assert_eq!(engine.resolve_base(&intent).shadow, glow);
    }

    #[test]
    fn apply_state_is_pure(intent in arb_intent(), state in arb_state()) {
        let engine = StyleEngine::new(registry());
        let base = engine.resolve_base(&intent);
        let snapshot = base.clone();

        let first = engine.apply_state(&base, &state, &intent);
        let second = engine.apply_state(&base, &state, &intent);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&base, &snapshot);
    }

    #[test]
    fn size_and_padding_do_not_touch_colors(intent in arb_intent()) {
        let engine = StyleEngine::new(registry());
        let reference = StyleIntent {
            size: SizeId::default(),
            padding: PaddingId::default(),
            ..intent.clone()
        };

        let style = engine.resolve_base(&intent);
        let expected = engine.resolve_base(&reference);
        prop_assert_eq!(&style.background, &expected.background);
        prop_assert_eq!(style.border_color, expected.border_color);
        prop_assert_eq!(style.shadow, expected.shadow);
        prop_assert_eq!(style.padding, intent.padding.padding());
        prop_assert_eq!(style.max_width, intent.size.max_width());
    }
}

#[test]
fn engine_serves_concurrent_callers() {
    let handles: Vec<_> = VariantId::ALL
        .iter()
        .map(|variant| {
            let variant = *variant;
            std::thread::spawn(move || {
                let engine = StyleEngine::global().unwrap();
                engine.resolve(
                    &StyleIntent::new().variant(variant).hoverable(true),
                    &InteractionState::new().hovered(true),
                )
            })
        })
        .collect();

    let engine = StyleEngine::new(registry());
    for (variant, handle) in VariantId::ALL.iter().zip(handles) {
        let expected = engine.resolve(
            &StyleIntent::new().variant(*variant).hoverable(true),
            &InteractionState::new().hovered(true),
        );
        assert_eq!(handle.join().unwrap(), expected);
    }
}
