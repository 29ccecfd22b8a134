//! Application contract between the runtime and the game layer.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
