//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `translate` maps winit window events into `InputEvent`s.

mod frame;
mod state;
mod translate;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub(crate) use translate::translate_window_event;
pub use types::{InputEvent, Key, KeyState};
