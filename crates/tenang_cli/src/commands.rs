//! Subcommand implementations

use anyhow::{Context, Result};
use tenang_style::{InteractionState, StyleEngine, StyleIntent};
use tenang_theme::{scale, PaletteConfig, PaletteRegistry};

use crate::ResolveArgs;

pub fn scale(color: &str, json: bool) -> Result<()> {
    let token = scale::generate(color).with_context(|| format!("Cannot expand {color:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&token)?);
        return Ok(());
    }

    for (step, color) in token.iter() {
        let hsl = color.to_hsl();
        println!(
            "{:>4}  {:<9}  h={:>5.1} s={:.3} l={:.3}",
            step.value(),
            color.to_hex_string(),
            hsl.h,
            hsl.s,
            hsl.l
        );
    }
    Ok(())
}

pub fn palettes(registry: &PaletteRegistry, json: bool) -> Result<()> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = registry
            .keys()
            .into_iter()
            .filter_map(|key| {
                let palette = registry.get(key)?;
                Some(serde_json::to_value(palette).map(|value| (key.to_string(), value)))
            })
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let traditions = registry.tradition_ids();
    for key in registry.keys() {
        let kind = if traditions.contains(&key) {
            "tradition"
        } else {
            "scale"
        };
        let base = registry.scale(key).base();
        println!("{key:<12} {kind:<9} {}", base.to_hex_string());
    }
    Ok(())
}

pub fn resolve(registry: &PaletteRegistry, args: &ResolveArgs) -> Result<()> {
    let (intent, state) = request_from_args(args);
    let engine = StyleEngine::new(registry);

    let style = if args.base {
        engine.resolve_base(&intent)
    } else {
        engine.resolve(&intent, &state)
    };
    println!("{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}

pub fn defaults() -> Result<()> {
    let toml = PaletteConfig::builtin()
        .to_toml()
        .context("Failed to serialize palette config")?;
    print!("{toml}");
    Ok(())
}

fn request_from_args(args: &ResolveArgs) -> (StyleIntent, InteractionState) {
    let mut intent = StyleIntent::new()
        .variant(args.variant.as_str())
        .size(args.size.as_str())
        .padding(args.padding.as_str())
        .shadow(args.shadow.as_str())
        .gradient(args.gradient)
        .cultural_pattern(args.pattern)
        .spiritual_glow(args.glow)
        .breathing(args.breathing)
        .hoverable(args.hoverable)
        .clickable(args.clickable);
    if let Some(tradition) = &args.tradition {
        intent = intent.tradition(tradition.as_str());
    }

    let state = InteractionState::new()
        .hovered(args.hovered)
        .pressed(args.pressed)
        .focused(args.focused)
        .selected(args.selected)
        .interactive(!args.non_interactive);

    (intent, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use tenang_style::VariantId;
    use tenang_theme::ShadowId;

    fn resolve_args(argv: &[&str]) -> ResolveArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            crate::Commands::Resolve(args) => args,
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_resolve_flags_build_request() {
        let args = resolve_args(&[
            "tenang",
            "resolve",
            "--tradition",
            "balinese",
            "--variant",
            "glass",
            "--shadow",
            "lg",
            "--clickable",
            "--pressed",
            "--static",
        ]);
        let (intent, state) = request_from_args(&args);

        assert_eq!(intent.tradition.as_deref(), Some("balinese"));
        assert_eq!(intent.variant, VariantId::Glass);
        assert_eq!(intent.shadow, ShadowId::Lg);
        assert!(intent.clickable);
        assert!(state.pressed);
        assert!(!state.interactive);
    }

    #[test]
    fn test_unknown_ids_fall_back() {
        let args = resolve_args(&["tenang", "resolve", "--variant", "neon", "--size", "huge"]);
        let (intent, state) = request_from_args(&args);

        assert_eq!(intent, StyleIntent::new());
        assert_eq!(state, InteractionState::new());
    }
}
