//! Operator-facing text
//!
//! The shift report and the "why" trigger panel. Both are derived from an
//! assessment; neither feeds back into it.

mod render;
mod why;

pub use render::render;
pub use why::{why_text, DEFAULT_WHY_LIMIT, NO_TRIGGERS};
