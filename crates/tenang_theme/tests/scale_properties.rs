use proptest::prelude::*;
use tenang_core::Color;
use tenang_theme::scale::{generate, generate_from};
use tenang_theme::ScaleStep;

const TOLERANCE: f32 = 1e-4;

fn arb_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgba8(r, g, b, 255))
}

proptest! {
    #[test]
    fn step_500_is_the_exact_base(base in arb_color()) {
        prop_assert_eq!(generate_from(base).get(ScaleStep::S500), base);
    }

    #[test]
    fn lightness_never_increases_toward_950(base in arb_color()) {
        let scale = generate_from(base);
        let lightness: Vec<f32> = ScaleStep::ALL.iter().map(|step| scale.lightness(*step)).collect();
        for pair in lightness.windows(2) {
            prop_assert!(pair[0] + TOLERANCE >= pair[1], "{:?} from {}", lightness, base);
        }
    }

    #[test]
    fn generation_is_deterministic(base in arb_color()) {
        let first: Vec<[u32; 4]> = generate_from(base)
            .iter()
            .map(|(_, c)| c.to_array().map(f32::to_bits))
            .collect();
        let second: Vec<[u32; 4]> = generate_from(base)
            .iter()
            .map(|(_, c)| c.to_array().map(f32::to_bits))
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hex_input_matches_color_input(base in arb_color()) {
        let hex = base.to_hex_string();
        prop_assert_eq!(generate(&hex).unwrap(), generate_from(base));
    }
}

#[test]
fn pure_white_and_black_scales() {
    let white = generate("white").unwrap();
    assert_eq!(white.base(), Color::WHITE);
    assert!((white.lightness(ScaleStep::S50) - 1.0).abs() < TOLERANCE);

    let black = generate("black").unwrap();
    assert_eq!(black.get(ScaleStep::S950), Color::BLACK);
}
