use glam::{DVec2, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch is pinned to `±PITCH_LIMIT` degrees so the view never flips over the poles.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view, in degrees.
pub const FOV_MIN: f32 = 1.0;
/// Widest field of view, in degrees.
pub const FOV_MAX: f32 = 120.0;

/// Movement directions the frame loop can request.
///
/// Forward/Backward/Left/Right are view-relative. Up/Down follow the world Y
/// axis regardless of pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Starting values for a camera, restored by [`Camera::reset_to_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// World units per second.
    pub move_speed: f32,
    /// Degrees of rotation per pixel of pointer motion.
    pub look_sensitivity: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 4.0),
            yaw: -77.0,
            pitch: -25.0,
            fov: 45.0,
            move_speed: 2.5,
            look_sensitivity: 0.1,
        }
    }
}

/// Fly camera driven once per frame by keyboard, pointer and scroll input.
///
/// Orientation is held as two Euler angles in degrees. The front vector is
/// recomputed from them on every change so it stays unit length and cannot
/// drift. Roll is not modelled.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Unclamped; negative values invert movement.
    pub move_speed: f32,
    /// Unclamped; negative values invert look.
    pub look_sensitivity: f32,
    yaw: f32,
    pitch: f32,
    fov: f32,
    front: Vec3,
    up: Vec3,
    /// `None` until the first look call seeds the baseline.
    last_cursor: Option<DVec2>,
    defaults: CameraDefaults,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraDefaults::default())
    }
}

impl Camera {
    pub fn new(defaults: CameraDefaults) -> Self {
        let mut camera = Self {
            position: defaults.position,
            move_speed: defaults.move_speed,
            look_sensitivity: defaults.look_sensitivity,
            yaw: defaults.yaw,
            pitch: defaults.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov: defaults.fov.clamp(FOV_MIN, FOV_MAX),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            last_cursor: None,
            defaults,
        };
        camera.update_front();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Fixed world-up reference. Only used as a cross-product operand.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Local right axis, recomputed from the current front vector.
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Last pointer position seen by [`Camera::look`], if any.
    pub fn last_cursor(&self) -> Option<DVec2> {
        self.last_cursor
    }

    pub fn defaults(&self) -> &CameraDefaults {
        &self.defaults
    }

    /// Translate the camera by `move_speed * dt` in the given direction.
    pub fn move_in(&mut self, direction: Direction, dt: f32) {
        let velocity = self.move_speed * dt;
        match direction {
            Direction::Forward => self.position += self.front * velocity,
            Direction::Backward => self.position -= self.front * velocity,
            Direction::Left => self.position -= self.right() * velocity,
            Direction::Right => self.position += self.right() * velocity,
            Direction::Up => self.position.y += velocity,
            Direction::Down => self.position.y -= velocity,
        }
    }

    /// Rotate from an absolute pointer position.
    ///
    /// The first call only records the position, so the view does not snap
    /// when the pointer enters the window from far away. Screen Y grows
    /// downward, so moving the pointer up raises the pitch.
    pub fn look(&mut self, cursor_x: f64, cursor_y: f64) {
        let cursor = DVec2::new(cursor_x, cursor_y);
        let Some(last) = self.last_cursor.replace(cursor) else {
            tracing::debug!(x = cursor_x, y = cursor_y, "seeded cursor baseline");
            return;
        };

        let offset_x = (cursor.x - last.x) as f32 * self.look_sensitivity;
        let offset_y = (last.y - cursor.y) as f32 * self.look_sensitivity;

        self.yaw += offset_x;
        self.pitch = (self.pitch + offset_y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    /// Narrow (positive delta) or widen the field of view.
    pub fn zoom(&mut self, scroll_delta: f64) {
        self.set_fov(self.fov - scroll_delta as f32);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update_front();
    }

    /// Set the pitch, pinned to `±PITCH_LIMIT`.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_front();
    }

    /// Set the field of view, clamped to `[FOV_MIN, FOV_MAX]`.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(FOV_MIN, FOV_MAX);
    }

    /// Restore every tunable to the construction defaults.
    ///
    /// The cursor baseline survives, so the next pointer event produces a
    /// normal delta instead of being swallowed as a seed.
    pub fn reset_to_defaults(&mut self) {
        let defaults = self.defaults;
        self.position = defaults.position;
        self.move_speed = defaults.move_speed;
        self.look_sensitivity = defaults.look_sensitivity;
        self.yaw = defaults.yaw;
        self.pitch = defaults.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.fov = defaults.fov.clamp(FOV_MIN, FOV_MAX);
        self.update_front();
        tracing::debug!("camera reset to defaults");
    }

    /// Forget the cursor baseline; the next look call seeds it again.
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_front(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }
}
