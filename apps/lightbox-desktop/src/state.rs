use egui::Context as EguiContext;
use glam::{DVec2, Vec3};
use lightbox_camera::Camera;
use lightbox_config::ViewerConfig;
use lightbox_input::{Action, InputState, Key, VirtualCursor};
use lightbox_render::{ClipPlanes, RenderView};
use lightbox_scene::Scene;
use lightbox_tools::FrameStats;
use std::ops::RangeInclusive;
use std::time::Instant;
use winit::keyboard::KeyCode;

/// Longest frame step applied to movement, so a stall does not teleport the camera.
const MAX_FRAME_DT: f32 = 0.1;

/// Everything the frame loop mutates. Owned by the window handler.
pub struct AppState {
    pub camera: Camera,
    pub scene: Scene,
    pub clip: ClipPlanes,
    pub aspect: f32,
    pub show_panel: bool,
    input: InputState,
    cursor: VirtualCursor,
    frame_stats: FrameStats,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &ViewerConfig) -> Self {
        let center = DVec2::new(
            config.window.width as f64 / 2.0,
            config.window.height as f64 / 2.0,
        );
        Self {
            camera: Camera::new(config.camera),
            scene: config.scene(),
            clip: config.clip,
            aspect: config.aspect(),
            show_panel: false,
            input: InputState::default(),
            cursor: VirtualCursor::new(center),
            frame_stats: FrameStats::new(),
            last_frame: Instant::now(),
        }
    }

    /// Look input is only taken while the pointer is captured.
    pub fn pointer_captured(&self) -> bool {
        !self.show_panel
    }

    pub fn view(&self) -> RenderView {
        RenderView::from_camera(&self.camera, self.aspect, self.clip)
    }

    /// Advance one frame: timing, then held-key movement and arrow-key look.
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.frame_stats.record(elapsed);
        let dt = elapsed.as_secs_f32().min(MAX_FRAME_DT);

        for action in self.input.held_actions() {
            match action {
                Action::Move(direction) => self.camera.move_in(direction, dt),
                Action::Nudge { dx, dy } => self.pointer_moved(dx, dy),
                Action::ToggleDebugPanel | Action::Quit => {}
            }
        }
    }

    /// Feed relative pointer motion through the virtual cursor to the camera.
    pub fn pointer_moved(&mut self, dx: f64, dy: f64) {
        let p = self.cursor.accumulate(dx, dy);
        self.camera.look(p.x, p.y);
    }

    pub fn scrolled(&mut self, lines: f64) {
        self.camera.zoom(lines);
    }

    /// Returns the one-shot action triggered by this key event, if any.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> Option<Action> {
        let key = map_key(code)?;
        if !pressed {
            self.input.release(key);
            return None;
        }
        let action = self.input.press(key)?;
        if action == Action::ToggleDebugPanel {
            self.show_panel = !self.show_panel;
            tracing::debug!(visible = self.show_panel, "toggled debug panel");
        }
        Some(action)
    }

    pub fn focus_lost(&mut self) {
        self.input.clear();
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext, screen_width: f32) {
        if !self.show_panel {
            return;
        }

        egui::SidePanel::left("debug_panel")
            .exact_width(screen_width / 3.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("LearnOpenGL Debug Window");
                ui.separator();

                egui::CollapsingHeader::new("Camera").show(ui, |ui| {
                    self.camera_controls(ui);
                });
                egui::CollapsingHeader::new("Lighting").show(ui, |ui| {
                    self.lighting_controls(ui);
                });

                ui.separator();
                ui.label(format!(
                    "Application average {:.3} ms/frame ({:.1} FPS)",
                    self.frame_stats.average_frame_ms(),
                    self.frame_stats.fps()
                ));
                ui.small("U: Toggle Panel | WASD/Space/X: Move | Arrows: Look | Esc: Quit");
            });
    }

    fn camera_controls(&mut self, ui: &mut egui::Ui) {
        let camera = &mut self.camera;
        if ui.button("Reset").clicked() {
            camera.reset_to_defaults();
        }

        ui.label("Camera Position");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut camera.position.x).prefix("X: ").speed(0.05));
            ui.add(egui::DragValue::new(&mut camera.position.y).prefix("Y: ").speed(0.05));
            ui.add(egui::DragValue::new(&mut camera.position.z).prefix("Z: ").speed(0.05));
        });

        let mut yaw = camera.yaw();
        if ui.add(egui::Slider::new(&mut yaw, -360.0..=360.0).text("Camera Yaw")).changed() {
            camera.set_yaw(yaw);
        }
        let mut pitch = camera.pitch();
        if ui.add(egui::Slider::new(&mut pitch, -89.0..=89.0).text("Camera Pitch")).changed() {
            camera.set_pitch(pitch);
        }
        let mut fov = camera.fov();
        if ui.add(egui::Slider::new(&mut fov, 1.0..=120.0).text("Camera FOV")).changed() {
            camera.set_fov(fov);
        }
        let mut speed = camera.move_speed;
        if ui.add(egui::Slider::new(&mut speed, 0.0..=10.0).text("Movement Speed")).changed() {
            camera.move_speed = speed;
        }
        let mut sens = camera.look_sensitivity;
        if ui.add(egui::Slider::new(&mut sens, 0.0..=10.0).text("Look Speed")).changed() {
            camera.look_sensitivity = sens;
        }
    }

    fn lighting_controls(&mut self, ui: &mut egui::Ui) {
        let scene = &mut self.scene;
        if ui.button("Reset Lighting").clicked() {
            scene.reset_lighting();
        }

        let mut color = scene.light.color.to_array();
        ui.horizontal(|ui| {
            if ui.color_edit_button_rgb(&mut color).changed() {
                scene.light.color = Vec3::from(color);
            }
            ui.label("Light Color");
        });
        let light = &mut scene.light;
        ui.add(egui::Slider::new(&mut light.ambient_intensity, 0.0..=1.0).text("Light Ambient Intensity"));
        ui.add(egui::Slider::new(&mut light.diffuse_intensity, 0.0..=1.0).text("Light Diffuse Intensity"));
        ui.add(egui::Slider::new(&mut light.specular_intensity, 0.0..=1.0).text("Light Specular Intensity"));

        let material = &mut scene.material;
        slider3(ui, "Cube Ambient Color", &mut material.ambient, 0.0..=1.0);
        slider3(ui, "Cube Diffuse Color", &mut material.diffuse, 0.0..=1.0);
        slider3(ui, "Cube Specular Color", &mut material.specular, 0.0..=1.0);
        let mut shininess = material.shininess;
        if ui.add(egui::Slider::new(&mut shininess, 0.0..=512.0).text("Cube Shininess")).changed() {
            material.shininess = shininess;
        }
    }
}

/// Three sliders editing one vector. Writes back only on change, so values
/// outside the range set from config survive being displayed.
fn slider3(ui: &mut egui::Ui, label: &str, value: &mut Vec3, range: RangeInclusive<f32>) {
    ui.label(label);
    let mut components = value.to_array();
    let mut changed = false;
    ui.horizontal(|ui| {
        for (c, axis) in components.iter_mut().zip(["R", "G", "B"]) {
            changed |= ui
                .add(egui::Slider::new(c, range.clone()).text(axis))
                .changed();
        }
    });
    if changed {
        *value = Vec3::from(components);
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::Space => Key::Space,
        KeyCode::KeyX => Key::X,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::KeyU => Key::U,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_camera::CameraDefaults;

    fn state() -> AppState {
        AppState::new(&ViewerConfig::default())
    }

    #[test]
    fn unmapped_keys_ignored() {
        let mut s = state();
        assert_eq!(s.handle_key(KeyCode::KeyQ, true), None);
    }

    #[test]
    fn u_toggles_panel_once_per_press() {
        let mut s = state();
        assert!(s.pointer_captured());
        assert_eq!(s.handle_key(KeyCode::KeyU, true), Some(Action::ToggleDebugPanel));
        assert!(s.show_panel);
        // Auto-repeat while held does not flip it back.
        assert_eq!(s.handle_key(KeyCode::KeyU, true), None);
        assert!(s.show_panel);
        s.handle_key(KeyCode::KeyU, false);
        s.handle_key(KeyCode::KeyU, true);
        assert!(!s.show_panel);
    }

    #[test]
    fn escape_requests_quit() {
        let mut s = state();
        assert_eq!(s.handle_key(KeyCode::Escape, true), Some(Action::Quit));
    }

    #[test]
    fn first_pointer_motion_is_swallowed() {
        let mut s = state();
        let yaw = s.camera.yaw();
        s.pointer_moved(50.0, 0.0);
        assert_eq!(s.camera.yaw(), yaw);
        s.pointer_moved(10.0, 0.0);
        assert!((s.camera.yaw() - (yaw + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn scroll_zooms() {
        let mut s = state();
        s.scrolled(5.0);
        assert_eq!(s.camera.fov(), 40.0);
    }

    #[test]
    fn view_uses_configured_camera() {
        let mut config = ViewerConfig::default();
        config.camera = CameraDefaults {
            fov: 70.0,
            ..CameraDefaults::default()
        };
        let s = AppState::new(&config);
        assert_eq!(s.view().fov_degrees, 70.0);
    }

    #[test]
    fn focus_loss_stops_movement() {
        let mut s = state();
        s.handle_key(KeyCode::KeyW, true);
        s.focus_lost();
        let start = s.camera.position;
        s.update();
        assert_eq!(s.camera.position, start);
    }

    #[test]
    fn release_while_panel_open_stops_movement() {
        let mut s = state();
        s.handle_key(KeyCode::KeyW, true);
        s.handle_key(KeyCode::KeyU, true);
        assert!(s.show_panel);
        assert_eq!(s.handle_key(KeyCode::KeyW, false), None);
        let start = s.camera.position;
        s.update();
        assert_eq!(s.camera.position, start);
    }
}
