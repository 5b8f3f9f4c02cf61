//! Tenang Core
//!
//! Foundational primitives shared by the Tenang theming crates:
//!
//! - **Colors**: RGBA colors, HSL decomposition, CSS color parsing
//! - **Visual descriptors**: brushes, gradients, shadows, corner radii
//! - **State machines**: flat statecharts for steady-state effects
//!
//! # Example
//!
//! ```rust
//! use tenang_core::{Color, Hsl};
//!
//! let base = Color::parse("#7c6fb0").unwrap();
//! let hsl: Hsl = base.to_hsl();
//! let lighter = hsl.with_lightness(0.9).to_color();
//! assert!(lighter.to_hsl().l > hsl.l);
//! ```

pub mod color;
pub mod error;
pub mod fsm;
pub mod visual;

pub use color::{Color, Hsl};
pub use error::ColorError;
pub use fsm::{StateMachine, Transition};
pub use visual::{Brush, CornerRadius, GradientStop, LinearGradient, Shadow};
