//! Pexeso engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by the game
//! layer: window/event-loop plumbing, GL context bring-up, a keyboard
//! input model, and a colored-quad renderer.

pub mod core;
pub mod gl;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod render;
