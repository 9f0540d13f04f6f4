//! Scripted camera input for headless replay.
//!
//! A script is a YAML list of steps, each tagged with `op`:
//! ```yaml
//! - op: look
//!   x: 400.0
//!   y: 300.0
//! - op: move
//!   direction: forward
//!   dt: 0.5
//! - op: zoom
//!   delta: 10.0
//! - op: reset
//! ```

use lightbox_camera::{Camera, Direction};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

/// One input event applied to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Move { direction: Direction, dt: f32 },
    Look { x: f64, y: f64 },
    Zoom { delta: f64 },
    Reset,
    ResetCursor,
}

impl Step {
    pub fn apply(&self, camera: &mut Camera) {
        match *self {
            Step::Move { direction, dt } => camera.move_in(direction, dt),
            Step::Look { x, y } => camera.look(x, y),
            Step::Zoom { delta } => camera.zoom(delta),
            Step::Reset => camera.reset_to_defaults(),
            Step::ResetCursor => camera.reset_cursor(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let steps: Vec<Step> = serde_yaml::from_str(text)?;
        for (index, step) in steps.iter().enumerate() {
            if let Step::Move { dt, .. } = step {
                if !dt.is_finite() || *dt < 0.0 {
                    return Err(ScriptError::InvalidStep {
                        index,
                        reason: format!("dt must be a non-negative number, got {dt}"),
                    });
                }
            }
        }
        Ok(Self { steps })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Apply every step in order, calling `after` once per step.
    pub fn run(&self, camera: &mut Camera, mut after: impl FnMut(usize, &Step, &Camera)) {
        for (index, step) in self.steps.iter().enumerate() {
            step.apply(camera);
            tracing::debug!(index, ?step, "applied step");
            after(index, step, camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lightbox_camera::CameraDefaults;

    const LOOK_SCRIPT: &str = "
- op: look
  x: 400.0
  y: 300.0
- op: look
  x: 410.0
  y: 300.0
";

    #[test]
    fn parses_every_step_kind() {
        let script = Script::parse(
            "
- op: move
  direction: up
  dt: 0.5
- op: look
  x: 1.0
  y: 2.0
- op: zoom
  delta: -3.0
- op: reset
- op: reset_cursor
",
        )
        .unwrap();
        assert_eq!(
            script.steps,
            vec![
                Step::Move { direction: Direction::Up, dt: 0.5 },
                Step::Look { x: 1.0, y: 2.0 },
                Step::Zoom { delta: -3.0 },
                Step::Reset,
                Step::ResetCursor,
            ]
        );
    }

    #[test]
    fn look_script_turns_camera() {
        let mut camera = Camera::new(CameraDefaults {
            yaw: -90.0,
            pitch: 0.0,
            ..CameraDefaults::default()
        });
        let script = Script::parse(LOOK_SCRIPT).unwrap();
        let mut seen = Vec::new();
        script.run(&mut camera, |i, _, cam| seen.push((i, cam.yaw())));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].1, -90.0);
        assert!((camera.yaw() - -89.0).abs() < 1e-5);
    }

    #[test]
    fn move_script_translates() {
        let mut camera = Camera::default();
        let start = camera.position;
        let script = Script::parse("- op: move\n  direction: down\n  dt: 2.0\n").unwrap();
        script.run(&mut camera, |_, _, _| {});
        assert!(camera.position.abs_diff_eq(start - Vec3::Y * 5.0, 1e-5));
    }

    #[test]
    fn negative_dt_rejected() {
        let err = Script::parse("- op: zoom\n  delta: 1.0\n- op: move\n  direction: left\n  dt: -1.0\n")
            .unwrap_err();
        assert!(matches!(err, ScriptError::InvalidStep { index: 1, .. }));
    }

    #[test]
    fn unknown_op_rejected() {
        let err = Script::parse("- op: roll\n  degrees: 10.0\n").unwrap_err();
        assert!(matches!(err, ScriptError::Yaml(_)));
    }

    #[test]
    fn empty_script_is_noop() {
        let script = Script::parse("[]").unwrap();
        let mut camera = Camera::default();
        let before = camera.position;
        script.run(&mut camera, |_, _, _| {});
        assert_eq!(camera.position, before);
    }
}
