//! Keyframe animation descriptors
//!
//! An [`AnimationDescriptor`] is a complete, clock-free description of a
//! looping effect: keyframes, duration, timing function and iteration
//! policy. The engine only produces descriptors; a renderer owns the clock
//! and either hands the descriptor to its own animation backend or samples
//! it with [`AnimationDescriptor::sample_at`].

use serde::Serialize;
use smallvec::SmallVec;

use crate::easing::Easing;

/// Properties that can be animated in a keyframe
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct KeyframeProperties {
    /// Uniform scale factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Translation Y in pixels (negative is up)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
}

impl KeyframeProperties {
    /// Create properties with uniform scale
    pub fn scale(value: f32) -> Self {
        Self {
            scale: Some(value),
            ..Default::default()
        }
    }

    pub fn with_translate_y(mut self, y: f32) -> Self {
        self.translate_y = Some(y);
        self
    }

    /// Interpolate between two property sets
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            scale: lerp_opt(self.scale, other.scale, t),
            translate_y: lerp_opt(self.translate_y, other.translate_y, t),
        }
    }

    /// Get the resolved scale (defaults to 1.0 if not set)
    pub fn resolved_scale(&self) -> f32 {
        self.scale.unwrap_or(1.0)
    }

    /// Get the resolved vertical offset (defaults to 0.0 if not set)
    pub fn resolved_translate_y(&self) -> f32 {
        self.translate_y.unwrap_or(0.0)
    }
}

fn lerp_opt(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// A keyframe at a position in the cycle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Keyframe {
    /// Position in the cycle (0.0 to 1.0)
    pub offset: f32,
    pub properties: KeyframeProperties,
}

impl Keyframe {
    pub fn new(offset: f32, properties: KeyframeProperties) -> Self {
        Self { offset, properties }
    }
}

/// How many times an animation cycle repeats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Iterations {
    Count(u32),
    Infinite,
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Count(1)
    }
}

/// Playback direction for animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    /// Play forward (0.0 -> 1.0)
    #[default]
    Normal,
    /// Play in reverse (1.0 -> 0.0)
    Reverse,
    /// Alternate between forward and reverse each iteration
    Alternate,
}

/// Fill mode determines the animation state before/after playback
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// No fill - the element shows its un-animated style outside playback
    #[default]
    None,
    /// Hold the final keyframe value after animation completes
    Forwards,
    /// Apply the first keyframe value during the delay
    Backwards,
    /// Apply both forwards and backwards fill
    Both,
}

/// Declarative keyframe animation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationDescriptor {
    pub name: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Timing function applied to every keyframe segment
    pub easing: Easing,
    pub iterations: Iterations,
    pub direction: PlayDirection,
    pub fill_mode: FillMode,
    /// Keyframes sorted by offset
    pub keyframes: SmallVec<[Keyframe; 3]>,
}

impl AnimationDescriptor {
    pub fn new(name: &'static str, duration_ms: u32) -> Self {
        Self {
            name,
            duration_ms,
            delay_ms: 0,
            easing: Easing::Linear,
            iterations: Iterations::default(),
            direction: PlayDirection::Normal,
            fill_mode: FillMode::None,
            keyframes: SmallVec::new(),
        }
    }

    /// Add a keyframe (builder pattern), keeping keyframes sorted by offset
    pub fn keyframe(mut self, offset: f32, properties: KeyframeProperties) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let idx = self
            .keyframes
            .iter()
            .position(|kf| kf.offset > offset)
            .unwrap_or(self.keyframes.len());
        self.keyframes.insert(idx, Keyframe::new(offset, properties));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn infinite(self) -> Self {
        self.iterations(Iterations::Infinite)
    }

    pub fn direction(mut self, direction: PlayDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn first_keyframe(&self) -> Option<&Keyframe> {
        self.keyframes.first()
    }

    pub fn last_keyframe(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }

    /// Total running time in milliseconds, `None` when infinite
    pub fn total_duration_ms(&self) -> Option<u64> {
        match self.iterations {
            Iterations::Count(n) => {
                Some(self.delay_ms as u64 + self.duration_ms as u64 * n as u64)
            }
            Iterations::Infinite => None,
        }
    }

    /// Properties at a position within one cycle (0.0 to 1.0), ignoring direction
    pub fn sample(&self, progress: f32) -> KeyframeProperties {
        let Some(first) = self.keyframes.first() else {
            return KeyframeProperties::default();
        };
        let progress = progress.clamp(0.0, 1.0);

        let mut prev_kf = first;
        let mut next_kf = first;
        for kf in &self.keyframes {
            if kf.offset <= progress {
                prev_kf = kf;
            }
            if kf.offset >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.offset - next_kf.offset).abs() < f32::EPSILON {
            return prev_kf.properties;
        }

        let local = (progress - prev_kf.offset) / (next_kf.offset - prev_kf.offset);
        prev_kf
            .properties
            .lerp(&next_kf.properties, self.easing.apply(local))
    }

    /// Properties at `elapsed_ms` on the renderer's clock
    ///
    /// Honors delay, iteration count, direction and fill mode.
    pub fn sample_at(&self, elapsed_ms: u64) -> KeyframeProperties {
        let delay = self.delay_ms as u64;
        if elapsed_ms < delay {
            return match self.fill_mode {
                FillMode::Backwards | FillMode::Both => self.sample(self.directed(0, 0.0)),
                _ => KeyframeProperties::default(),
            };
        }

        if self.duration_ms == 0 {
            return self.sample(1.0);
        }

        let running = elapsed_ms - delay;
        let duration = self.duration_ms as u64;
        let iteration = running / duration;

        if let Iterations::Count(count) = self.iterations {
            if iteration >= count as u64 {
                return match self.fill_mode {
                    FillMode::Forwards | FillMode::Both => {
                        let last = (count as u64).saturating_sub(1);
                        self.sample(self.directed(last, 1.0))
                    }
                    _ => KeyframeProperties::default(),
                };
            }
        }

        let local = (running % duration) as f32 / duration as f32;
        self.sample(self.directed(iteration, local))
    }

    fn directed(&self, iteration: u64, progress: f32) -> f32 {
        let reversed = match self.direction {
            PlayDirection::Normal => false,
            PlayDirection::Reverse => true,
            PlayDirection::Alternate => iteration % 2 == 1,
        };
        if reversed {
            1.0 - progress
        } else {
            progress
        }
    }
}
