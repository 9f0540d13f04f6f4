//! Developer tooling: camera inspector and frame timing statistics.
//!
//! # Invariants
//! - Tools only read viewer state.

mod frame_stats;
mod inspector;

pub use frame_stats::{FrameStats, FRAME_WINDOW};
pub use inspector::{CameraInspector, CameraSummary};

pub fn crate_info() -> &'static str {
    concat!("lightbox-tools v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
