use lightbox_camera::Camera;

/// Read-only queries against the camera for the debug panel and CLI.
pub struct CameraInspector;

impl CameraInspector {
    pub fn summary(camera: &Camera) -> CameraSummary {
        let p = camera.position;
        let f = camera.front();
        CameraSummary {
            position: [p.x, p.y, p.z],
            front: [f.x, f.y, f.z],
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            fov: camera.fov(),
            move_speed: camera.move_speed,
            look_sensitivity: camera.look_sensitivity,
            cursor_seeded: camera.last_cursor().is_some(),
        }
    }
}

/// Snapshot of camera state.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSummary {
    pub position: [f32; 3],
    pub front: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub cursor_seeded: bool,
}

impl std::fmt::Display for CameraSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Camera: pos=({:.2}, {:.2}, {:.2}) front=({:.3}, {:.3}, {:.3}) yaw={:.2} pitch={:.2} fov={:.1} speed={:.2} sens={:.3}",
            self.position[0],
            self.position[1],
            self.position[2],
            self.front[0],
            self.front[1],
            self.front[2],
            self.yaw,
            self.pitch,
            self.fov,
            self.move_speed,
            self.look_sensitivity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_camera::Direction;

    #[test]
    fn summary_default_camera() {
        let summary = CameraInspector::summary(&Camera::default());
        assert_eq!(summary.position, [0.0, 2.0, 4.0]);
        assert_eq!(summary.yaw, -77.0);
        assert_eq!(summary.pitch, -25.0);
        assert_eq!(summary.fov, 45.0);
        assert!(!summary.cursor_seeded);
    }

    #[test]
    fn summary_tracks_changes() {
        let mut camera = Camera::default();
        camera.look(10.0, 10.0);
        camera.move_in(Direction::Up, 2.0);
        let summary = CameraInspector::summary(&camera);
        assert!(summary.cursor_seeded);
        assert_eq!(summary.position[1], 7.0);
    }

    #[test]
    fn summary_display() {
        let summary = CameraInspector::summary(&Camera::default());
        let s = format!("{summary}");
        assert!(s.contains("pos=(0.00, 2.00, 4.00)"));
        assert!(s.contains("fov=45.0"));
    }
}
