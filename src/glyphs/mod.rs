//! Reusable decorative shapes. Every glyph is deterministic and draws directly into the canvas.

pub(crate) mod building;
pub(crate) mod plumbing;
pub(crate) mod shapes;
