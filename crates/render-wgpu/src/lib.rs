//! wgpu render backend for the viewer.
//!
//! Draws a Phong-lit cube at the origin and a small flat-colored cube at the
//! light position.
//!
//! # Invariants
//! - The renderer never mutates camera or scene state.
//! - Shader failures are logged and do not abort the frame loop.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
