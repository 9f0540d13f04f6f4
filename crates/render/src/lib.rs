//! Rendering adapter: renderer-agnostic view and backend trait.
//!
//! # Invariants
//! - Renderers read camera and scene state, never mutate it.
//! - The view is rebuilt from the camera every frame.

mod renderer;

pub use renderer::{ClipPlanes, DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    concat!("lightbox-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
