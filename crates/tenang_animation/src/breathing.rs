//! Breathing effect
//!
//! A slow scale/translate pulse that runs while a surface has breathing
//! enabled. The effect has two steady states and no terminal state:
//!
//! ```text
//!          Enable
//!   Idle ---------> Breathing
//!        <---------
//!          Disable
//! ```
//!
//! The engine maps the caller's flag straight to a state with
//! [`BreathingState::from_flag`]. A renderer that wants to know when to
//! (re)start its clock keeps a [`BreathingMachine`] and feeds it the same
//! flag on every resolution.

use serde::Serialize;
use tenang_core::fsm::{StateMachine, Transition};

use crate::easing::Easing;
use crate::keyframe::{AnimationDescriptor, KeyframeProperties};

/// One full inhale/exhale cycle
pub const BREATH_DURATION_MS: u32 = 4000;

/// Scale at the top of the inhale
pub const BREATH_EXPANDED_SCALE: f32 = 1.02;

/// Vertical offset at the top of the inhale (negative is up)
pub const BREATH_RISE: f32 = -2.0;

/// Vertical lift a hovered surface already has; breathing composes on top of it
pub const HOVER_LIFT: f32 = -4.0;

/// Breathing effect state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathingState {
    #[default]
    Idle,
    Breathing,
}

impl BreathingState {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            BreathingState::Breathing
        } else {
            BreathingState::Idle
        }
    }

    pub fn is_breathing(self) -> bool {
        self == BreathingState::Breathing
    }

    /// Animation to run in this state, if any
    pub fn animation(self, hovered: bool) -> Option<AnimationDescriptor> {
        match self {
            BreathingState::Idle => None,
            BreathingState::Breathing => Some(breathing_animation(hovered)),
        }
    }
}

/// Events driving the breathing machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathingEvent {
    Enable,
    Disable,
}

/// Stateful wrapper for renderers tracking breathing across resolutions
pub struct BreathingMachine {
    fsm: StateMachine<BreathingState, BreathingEvent>,
}

impl BreathingMachine {
    pub fn new() -> Self {
        let fsm = StateMachine::new(
            BreathingState::Idle,
            vec![
                Transition::new(
                    BreathingState::Idle,
                    BreathingEvent::Enable,
                    BreathingState::Breathing,
                ),
                Transition::new(
                    BreathingState::Breathing,
                    BreathingEvent::Disable,
                    BreathingState::Idle,
                ),
            ],
        );
        Self { fsm }
    }

    pub fn state(&self) -> BreathingState {
        self.fsm.current_state()
    }

    /// Feed the current flag; returns the (possibly new) state
    pub fn sync(&mut self, enabled: bool) -> BreathingState {
        let event = if enabled {
            BreathingEvent::Enable
        } else {
            BreathingEvent::Disable
        };
        let previous = self.state();
        let state = self.fsm.send(event);
        if state != previous {
            tracing::debug!(from = ?previous, to = ?state, "breathing state changed");
        }
        state
    }

    /// Register a callback run each time breathing starts
    pub fn on_start<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.fsm.on_enter(BreathingState::Breathing, callback);
    }

    /// Register a callback run each time breathing stops
    pub fn on_stop<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.fsm.on_exit(BreathingState::Breathing, callback);
    }

    /// Number of state changes seen so far
    pub fn transition_count(&self) -> usize {
        self.fsm.transition_count()
    }
}

impl Default for BreathingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BreathingMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreathingMachine")
            .field("state", &self.state())
            .finish()
    }
}

/// The breathing cycle: rest at 0% and 100%, expanded at 50%
///
/// When `hovered`, both the resting and the expanded offsets are shifted by
/// [`HOVER_LIFT`] so the pulse rides on the hover elevation.
pub fn breathing_animation(hovered: bool) -> AnimationDescriptor {
    let shift = if hovered { HOVER_LIFT } else { 0.0 };
    let resting = KeyframeProperties::scale(1.0).with_translate_y(shift);
    let expanded = KeyframeProperties::scale(BREATH_EXPANDED_SCALE).with_translate_y(shift + BREATH_RISE);

    AnimationDescriptor::new("breathing", BREATH_DURATION_MS)
        .keyframe(0.0, resting)
        .keyframe(0.5, expanded)
        .keyframe(1.0, resting)
        .easing(Easing::EaseInOut)
        .infinite()
}
