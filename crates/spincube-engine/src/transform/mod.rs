//! Model/view/projection transform chain.
//!
//! `TransformState` owns the three matrices. View and projection are fixed at
//! construction; the model matrix accumulates one rotation increment per frame.

mod projection;
mod state;

pub use projection::{Projection, ProjectionPolicy};
pub use state::{Spin, TransformState, TransformUniform};
