//! Composed styles and overlays
//!
//! [`ComposedStyle`] is the engine's output: final values a renderer can
//! paint without consulting a palette. [`StyleOverlay`] is a partial style
//! produced by one interaction state; overlays merge left to right and are
//! then applied onto a copy of the base style.
//!
//! ```rust
//! use tenang_core::Color;
//! use tenang_style::{StyleOverlay, Transform};
//!
//! let hover = StyleOverlay::new().bg(Color::WHITE).transform(Transform::lift(-4.0));
//! let pressed = StyleOverlay::new().transform(Transform::new(1.0, 0.98));
//!
//! // Later overlays win for the fields they set
//! let merged = hover.merge(&pressed);
//! assert_eq!(merged.transform, Some(Transform::new(1.0, 0.98)));
//! assert!(merged.background.is_some());
//! ```

use serde::Serialize;
use tenang_animation::AnimationDescriptor;
use tenang_core::{Brush, Color, CornerRadius, Shadow};

/// Vertical offset and uniform scale of a surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform {
    /// Vertical offset in pixels (negative is up)
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(0.0, 1.0);

    pub const fn new(translate_y: f32, scale: f32) -> Self {
        Self { translate_y, scale }
    }

    /// Pure vertical offset
    pub const fn lift(translate_y: f32) -> Self {
        Self::new(translate_y, 1.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Focus ring drawn outside the border
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Outline {
    pub width: f32,
    /// Gap between border and ring
    pub offset: f32,
    pub color: Color,
}

/// Low-opacity motif painted over the background
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatternOverlay {
    /// Motif set to draw: a tradition id, or `"warm"` for the cultural variant
    pub motif: String,
    pub color: Color,
    pub opacity: f32,
}

/// Marker drawn along the leading edge of a selected surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SelectionIndicator {
    pub color: Color,
    pub thickness: f32,
}

/// Fully resolved presentation of one surface
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComposedStyle {
    pub background: Brush,
    pub border_color: Color,
    pub border_width: f32,
    pub text_color: Color,
    pub shadow: Shadow,
    /// Backdrop blur radius in pixels
    pub backdrop_blur: Option<f32>,
    pub border_radius: CornerRadius,
    pub padding: f32,
    /// `None` is unbounded
    pub max_width: Option<f32>,
    pub transform: Transform,
    pub outline: Option<Outline>,
    pub cultural_pattern: Option<PatternOverlay>,
    pub selection_indicator: Option<SelectionIndicator>,
    pub animation: Option<AnimationDescriptor>,
}

impl Default for ComposedStyle {
    fn default() -> Self {
        Self {
            background: Brush::default(),
            border_color: Color::TRANSPARENT,
            border_width: 1.0,
            text_color: Color::BLACK,
            shadow: Shadow::none(),
            backdrop_blur: None,
            border_radius: CornerRadius::ZERO,
            padding: 0.0,
            max_width: None,
            transform: Transform::IDENTITY,
            outline: None,
            cultural_pattern: None,
            selection_indicator: None,
            animation: None,
        }
    }
}

impl ComposedStyle {
    /// A copy with `overlay` applied; `self` is left untouched
    pub fn with_overlay(&self, overlay: &StyleOverlay) -> ComposedStyle {
        let mut style = self.clone();
        if let Some(background) = &overlay.background {
            style.background = background.clone();
        }
        if let Some(color) = overlay.border_color {
            style.border_color = color;
        }
        if let Some(shadow) = overlay.shadow {
            style.shadow = shadow;
        }
        if let Some(transform) = overlay.transform {
            style.transform = transform;
        }
        if let Some(outline) = overlay.outline {
            style.outline = Some(outline);
        }
        if let Some(indicator) = overlay.selection_indicator {
            style.selection_indicator = Some(indicator);
        }
        style
    }
}

/// Partial style contributed by one interaction state
///
/// All properties are optional - when merging overlays, only set properties
/// override.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverlay {
    pub background: Option<Brush>,
    pub border_color: Option<Color>,
    pub shadow: Option<Shadow>,
    pub transform: Option<Transform>,
    pub outline: Option<Outline>,
    pub selection_indicator: Option<SelectionIndicator>,
}

impl StyleOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn selection_indicator(mut self, indicator: SelectionIndicator) -> Self {
        self.selection_indicator = Some(indicator);
        self
    }

    /// Merge `other` on top of this overlay (`other` wins where set)
    pub fn merge(&self, other: &StyleOverlay) -> StyleOverlay {
        StyleOverlay {
            background: other.background.clone().or_else(|| self.background.clone()),
            border_color: other.border_color.or(self.border_color),
            shadow: other.shadow.or(self.shadow),
            transform: other.transform.or(self.transform),
            outline: other.outline.or(self.outline),
            selection_indicator: other.selection_indicator.or(self.selection_indicator),
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.border_color.is_none()
            && self.shadow.is_none()
            && self.transform.is_none()
            && self.outline.is_none()
            && self.selection_indicator.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overlay_is_identity() {
        let base = ComposedStyle {
            background: Brush::solid(Color::WHITE),
            padding: 16.0,
            ..ComposedStyle::default()
        };
        assert!(StyleOverlay::new().is_empty());
        assert_eq!(base.with_overlay(&StyleOverlay::new()), base);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let hover = StyleOverlay::new()
            .bg(Color::WHITE)
            .shadow(Shadow::new(0.0, 12.0, 28.0, -6.0, Color::BLACK.with_alpha(0.14)));
        let focus = StyleOverlay::new().outline(Outline {
            width: 2.0,
            offset: 2.0,
            color: Color::BLACK,
        });

        let merged = hover.merge(&focus);
        assert_eq!(merged.background, Some(Brush::solid(Color::WHITE)));
        assert_eq!(merged.shadow, hover.shadow);
        assert_eq!(merged.outline, focus.outline);
    }

    #[test]
    fn test_with_overlay_leaves_base_untouched() {
        let base = ComposedStyle::default();
        let lifted = base.with_overlay(&StyleOverlay::new().transform(Transform::lift(-4.0)));

        assert_eq!(lifted.transform.translate_y, -4.0);
        assert!(base.transform.is_identity());
    }

    #[test]
    fn test_serializes_final_values() {
        let style = ComposedStyle {
            background: Brush::solid(Color::from_hex(0xFDFCFA)),
            ..ComposedStyle::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["background"]["type"], "solid");
        assert_eq!(json["background"]["color"], "#fdfcfa");
        assert_eq!(json["transform"]["scale"], 1.0);
        assert!(json["outline"].is_null());
    }
}
