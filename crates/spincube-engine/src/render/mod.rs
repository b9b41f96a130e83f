//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers, bind groups) and
//! records its passes into the frame's `RenderTarget`.

mod ctx;
pub mod cube;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
