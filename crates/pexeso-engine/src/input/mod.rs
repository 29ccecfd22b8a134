//! Platform-agnostic keyboard input model.
//!
//! [`InputState`] holds "is down" information, [`InputFrame`] the
//! per-frame transition deltas. The window runtime translates winit
//! events into [`InputEvent`]s and applies them here.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
