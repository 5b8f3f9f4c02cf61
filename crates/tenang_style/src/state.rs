//! Interaction state
//!
//! The renderer owns one [`InteractionState`] per surface, flips its flags
//! on pointer and focus events, and passes it by value into every
//! resolution. The engine never stores it.

use serde::{Deserialize, Serialize};

use crate::intent::StyleIntent;

/// Transient pointer and focus flags of a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub selected: bool,
    /// Pointer overlays (hover, pressed) are disabled when false
    pub interactive: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: false,
            pressed: false,
            focused: false,
            selected: false,
            interactive: true,
        }
    }
}

impl InteractionState {
    /// At rest: nothing hovered, pressed, focused or selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Whether the hover overlay applies to a surface with this intent
    pub fn hover_applies(&self, intent: &StyleIntent) -> bool {
        self.interactive && self.hovered && intent.reacts_to_hover()
    }

    /// Whether the pressed overlay applies to a surface with this intent
    pub fn press_applies(&self, intent: &StyleIntent) -> bool {
        self.interactive && self.pressed && intent.clickable
    }
}
