//! Compiled-in geometry.

mod cube;

pub use cube::{Vertex, CUBE_INDEX_COUNT, CUBE_INDICES, CUBE_VERTICES};
