//! Design tokens
//!
//! Fixed lookup tables the style engine resolves ids against:
//! - Shadow tiers and the shadow ids that select them
//! - Size (max width) and padding scales

mod shadow;
mod spacing;

pub use shadow::*;
pub use spacing::*;
