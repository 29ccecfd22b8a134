use winit::window::Window;

use crate::input::{InputFrame, InputState};

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub gl: &'a glow::Context,
    pub input: &'a InputState,
    pub frame: &'a InputFrame,
}

impl FrameCtx<'_> {
    /// Returns the drawable size as `(width, height)` in physical pixels.
    pub fn size(&self) -> (f32, f32) {
        let size = self.window.inner_size();
        (size.width as f32, size.height as f32)
    }
}
