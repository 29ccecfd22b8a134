//! Drawing primitives built on the GL context.

mod quad;

pub use quad::QuadRenderer;
