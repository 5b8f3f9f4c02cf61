//! Tenang Animation
//!
//! Declarative animation descriptors for themed surfaces.
//!
//! # Features
//!
//! - **Easing**: the CSS `linear` and `ease-in-out` timing functions
//! - **Keyframes**: scale/offset keyframe descriptors with iteration,
//!   direction and fill policies, sampleable on any clock
//! - **Breathing**: the two-state breathing effect and its pulse descriptor
//!
//! Nothing in this crate owns a timer. Descriptors are values; the renderer
//! decides when time passes.

pub mod breathing;
pub mod easing;
pub mod keyframe;

pub use breathing::{breathing_animation, BreathingMachine, BreathingState, HOVER_LIFT};
pub use easing::Easing;
pub use keyframe::{AnimationDescriptor, FillMode, Iterations, Keyframe, KeyframeProperties, PlayDirection};
