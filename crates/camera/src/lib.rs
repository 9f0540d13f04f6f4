//! Free-fly camera: viewer position and orientation for the frame loop.
//!
//! # Invariants
//! - The front vector is derived from `(yaw, pitch)` and never written directly.
//! - Pitch stays within `[-89, 89]` degrees, field of view within `[1, 120]`.
//! - The first look after construction (or a cursor reset) never rotates the view.

mod camera;

pub use camera::{Camera, CameraDefaults, Direction, FOV_MAX, FOV_MIN, PITCH_LIMIT};
