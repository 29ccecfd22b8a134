//! Single-window winit runtime driving the GL stack and the app.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
