//! Scene parameters: one point light and one material, tunable at runtime.
//!
//! # Invariants
//! - Light colors sent to the shader are always derived from color and intensities.

mod lighting;

pub use lighting::{Light, Material, PhongTerms, Scene, LIGHT_CUBE_SCALE};
