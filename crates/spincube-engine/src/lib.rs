//! Spincube engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the cube renderer
//! driven by the `spincube` binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod mesh;
pub mod render;
pub mod transform;
