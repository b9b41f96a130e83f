//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application, plus the per-frame context handed to it.

mod app;
mod ctx;
mod loop_state;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use loop_state::LoopState;
