//! Visual descriptors
//!
//! Plain values a renderer turns into pixels: brushes, gradients, shadows
//! and corner radii. Nothing here references a palette; every field holds a
//! final resolved value.

use serde::Serialize;
use smallvec::SmallVec;

use crate::color::Color;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient line (0.0 to 1.0)
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient along an angle (CSS convention: 0deg points up, 90deg right)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    pub angle_deg: f32,
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    /// Two-stop gradient from `from` at 0% to `to` at 100%
    pub fn two_stop(angle_deg: f32, from: Color, to: Color) -> Self {
        let mut stops = SmallVec::new();
        stops.push(GradientStop::new(0.0, from));
        stops.push(GradientStop::new(1.0, to));
        Self { angle_deg, stops }
    }

    pub fn first_color(&self) -> Option<Color> {
        self.stops.first().map(|stop| stop.color)
    }

    pub fn last_color(&self) -> Option<Color> {
        self.stops.last().map(|stop| stop.color)
    }
}

/// Brush for filling a surface
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Brush {
    Solid { color: Color },
    LinearGradient(LinearGradient),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid { color }
    }

    /// The solid color, if this brush is flat
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Brush::Solid { color } => Some(*color),
            Brush::LinearGradient(_) => None,
        }
    }

    /// A representative color: the solid color or the first gradient stop
    pub fn primary_color(&self) -> Color {
        match self {
            Brush::Solid { color } => *color,
            Brush::LinearGradient(gradient) => {
                gradient.first_color().unwrap_or(Color::TRANSPARENT)
            }
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::solid(color)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::solid(Color::TRANSPARENT)
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius::uniform(0.0);

    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    pub fn is_none(&self) -> bool {
        self.color.a <= 0.0 || (self.blur <= 0.0 && self.spread <= 0.0 && self.offset_y == 0.0)
    }

    /// Same geometry and opacity, hue taken from `tint`
    pub fn tinted(&self, tint: Color) -> Self {
        Self {
            color: tint.with_alpha(self.color.a),
            ..*self
        }
    }

    /// Linear interpolation between two shadows
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            blur: from.blur + (to.blur - from.blur) * t,
            spread: from.spread + (to.spread - from.spread) * t,
            color: Color::lerp(&from.color, &to.color, t),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}
