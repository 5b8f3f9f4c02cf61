//! Tonal color scales
//!
//! A single authored base color expands into an 11-step scale keyed
//! `50, 100, 200, … 900, 950`. Step 500 is the base itself, lighter steps
//! desaturate toward near-white, darker steps keep saturation and scale
//! lightness down.
//!
//! ```rust
//! use tenang_core::Color;
//! use tenang_theme::scale::{generate, ScaleStep};
//!
//! let sage = generate("#5b8a72").unwrap();
//! assert_eq!(sage.get(ScaleStep::S500), Color::from_hex(0x5B8A72));
//! assert!(sage.lightness(ScaleStep::S50) > sage.lightness(ScaleStep::S950));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tenang_core::{Color, ColorError, Hsl};

/// Step keys of a tonal scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScaleStep {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ScaleStep {
    /// All steps, lightest first
    pub const ALL: [ScaleStep; 11] = [
        ScaleStep::S50,
        ScaleStep::S100,
        ScaleStep::S200,
        ScaleStep::S300,
        ScaleStep::S400,
        ScaleStep::S500,
        ScaleStep::S600,
        ScaleStep::S700,
        ScaleStep::S800,
        ScaleStep::S900,
        ScaleStep::S950,
    ];

    /// Numeric key (50, 100, … 950)
    pub fn value(self) -> u16 {
        match self {
            ScaleStep::S50 => 50,
            ScaleStep::S100 => 100,
            ScaleStep::S200 => 200,
            ScaleStep::S300 => 300,
            ScaleStep::S400 => 400,
            ScaleStep::S500 => 500,
            ScaleStep::S600 => 600,
            ScaleStep::S700 => 700,
            ScaleStep::S800 => 800,
            ScaleStep::S900 => 900,
            ScaleStep::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.value() == value)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Light steps: (step, saturation factor, lightness ceiling)
const LIGHT_STEPS: [(ScaleStep, f32, f32); 5] = [
    (ScaleStep::S50, 0.1, 0.98),
    (ScaleStep::S100, 0.2, 0.95),
    (ScaleStep::S200, 0.3, 0.9),
    (ScaleStep::S300, 0.45, 0.8),
    (ScaleStep::S400, 0.6, 0.7),
];

/// Dark steps: (step, lightness factor)
const DARK_STEPS: [(ScaleStep, f32); 5] = [
    (ScaleStep::S600, 0.8),
    (ScaleStep::S700, 0.65),
    (ScaleStep::S800, 0.5),
    (ScaleStep::S900, 0.35),
    (ScaleStep::S950, 0.15),
];

/// An immutable 11-step tonal scale
#[derive(Clone, Debug, PartialEq)]
pub struct ColorToken {
    steps: [Color; 11],
}

impl ColorToken {
    pub fn get(&self, step: ScaleStep) -> Color {
        self.steps[step.index()]
    }

    /// The base color (step 500)
    pub fn base(&self) -> Color {
        self.get(ScaleStep::S500)
    }

    /// HSL lightness of a step
    pub fn lightness(&self, step: ScaleStep) -> f32 {
        self.get(step).to_hsl().l
    }

    /// Steps paired with their colors, lightest first
    pub fn iter(&self) -> impl Iterator<Item = (ScaleStep, Color)> + '_ {
        ScaleStep::ALL.into_iter().map(move |step| (step, self.get(step)))
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.value().to_string(), &color)?;
        }
        map.end()
    }
}

/// Expand a base color into its tonal scale
pub fn generate_from(base: Color) -> ColorToken {
    let hsl = base.to_hsl();
    let mut steps = [base; 11];

    for (step, saturation, ceiling) in LIGHT_STEPS {
        // Bases lighter than the ceiling keep their own lightness so the
        // scale never darkens toward step 500.
        let tone = Hsl::new(hsl.h, hsl.s * saturation, ceiling.max(hsl.l), hsl.a);
        steps[step.index()] = tone.to_color();
    }

    for (step, factor) in DARK_STEPS {
        let tone = hsl.with_lightness((hsl.l * factor).max(0.0));
        steps[step.index()] = tone.to_color();
    }

    steps[ScaleStep::S500.index()] = base;
    ColorToken { steps }
}

/// Parse a base color and expand it into its tonal scale
pub fn generate(base: &str) -> Result<ColorToken, ColorError> {
    Color::parse(base).map(generate_from)
}
