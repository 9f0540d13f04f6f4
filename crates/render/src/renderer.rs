use glam::{Mat4, Vec3};
use lightbox_camera::Camera;
use lightbox_scene::Scene;
use serde::{Deserialize, Serialize};

/// Near and far clipping distances for the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPlanes {
    pub near: f32,
    pub far: f32,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Per-frame snapshot of what the camera sees.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point one unit ahead of the eye.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Width over height.
    pub aspect: f32,
    pub clip: ClipPlanes,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_camera(&Camera::default(), 800.0 / 600.0, ClipPlanes::default())
    }
}

impl RenderView {
    pub fn from_camera(camera: &Camera, aspect: f32, clip: ClipPlanes) -> Self {
        Self {
            eye: camera.position,
            target: camera.position + camera.front(),
            up: camera.up(),
            fov_degrees: camera.fov(),
            aspect,
            clip,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.clip.near,
            self.clip.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the given view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Renders the frame as human-readable text. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let terms = scene.light.terms();
        out.push_str("=== Frame ===\n");
        out.push_str(&format!(
            "View: eye={} target={} up={}\n",
            vec3(view.eye),
            vec3(view.target),
            vec3(view.up)
        ));
        out.push_str(&format!(
            "Projection: fov={:.1} aspect={:.3} near={} far={}\n",
            view.fov_degrees, view.aspect, view.clip.near, view.clip.far
        ));
        out.push_str(&format!(
            "Light: pos={} ambient={} diffuse={} specular={}\n",
            vec3(scene.light.position),
            vec3(terms.ambient),
            vec3(terms.diffuse),
            vec3(terms.specular)
        ));
        out.push_str(&format!(
            "Material: ambient={} diffuse={} specular={} shininess={:.1}\n",
            vec3(scene.material.ambient),
            vec3(scene.material.diffuse),
            vec3(scene.material.specular),
            scene.material.shininess
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_camera::CameraDefaults;

    #[test]
    fn view_tracks_camera() {
        let camera = Camera::default();
        let view = RenderView::from_camera(&camera, 2.0, ClipPlanes::default());
        assert_eq!(view.eye, camera.position);
        assert_eq!(view.target, camera.position + camera.front());
        assert_eq!(view.up, Vec3::Y);
        assert_eq!(view.fov_degrees, 45.0);
    }

    #[test]
    fn view_matrix_matches_camera() {
        let camera = Camera::default();
        let view = RenderView::from_camera(&camera, 1.0, ClipPlanes::default());
        assert!(view.view_matrix().abs_diff_eq(camera.view_matrix(), 1e-6));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = Camera::new(CameraDefaults {
            yaw: 10.0,
            pitch: 20.0,
            ..CameraDefaults::default()
        });
        let view = RenderView::from_camera(&camera, 16.0 / 9.0, ClipPlanes::default());
        let ndc = view.view_projection().project_point3(view.target);
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn narrower_fov_magnifies() {
        let mut camera = Camera::default();
        let point = camera.position + camera.front() * 5.0 + camera.right() * 0.5;
        let wide = RenderView::from_camera(&camera, 1.0, ClipPlanes::default());
        camera.zoom(20.0);
        let narrow = RenderView::from_camera(&camera, 1.0, ClipPlanes::default());
        let x_wide = wide.view_projection().project_point3(point).x;
        let x_narrow = narrow.view_projection().project_point3(point).x;
        assert!(x_narrow > x_wide);
    }

    #[test]
    fn debug_renderer_reports_view_and_scene() {
        let scene = Scene::default();
        let view = RenderView::default();
        let output = DebugTextRenderer::new().render(&scene, &view);
        assert!(output.contains("fov=45.0"));
        assert!(output.contains("eye=(0.000, 2.000, 4.000)"));
        assert!(output.contains("shininess=32.0"));
        assert!(output.contains("diffuse=(0.500, 0.500, 0.500)"));
        assert_eq!(output.lines().count(), 5);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn clip_planes_default() {
        let clip = ClipPlanes::default();
        assert_eq!(clip.near, 0.1);
        assert_eq!(clip.far, 100.0);
    }
}
