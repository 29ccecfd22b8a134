//! Coordinate and geometry types shared by the renderer and board layout.
//!
//! Canonical CPU space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! The renderer converts to NDC in the vertex shader using a resolution
//! uniform.

mod color;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
