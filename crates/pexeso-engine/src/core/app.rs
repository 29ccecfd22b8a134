use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the game layer.
pub trait App {
    /// Called once after the GL context is current, before the first
    /// frame. GPU resources (programs, renderers) are built here; an
    /// error aborts the runtime and propagates out of `Runtime::run`.
    fn on_ready(&mut self, gl: &glow::Context) -> Result<()> {
        let _ = gl;
        Ok(())
    }

    /// Called once per rendered frame, after the surface is cleared and
    /// before the buffer swap.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
