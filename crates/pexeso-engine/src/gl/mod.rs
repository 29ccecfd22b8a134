//! OpenGL context bring-up (glutin) and per-frame surface handling.

mod context;

pub use context::{GlInit, GlStack};
