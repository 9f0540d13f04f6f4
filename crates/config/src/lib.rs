//! Viewer configuration loaded from YAML or JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. An absent file means all defaults.

use lightbox_camera::{CameraDefaults, FOV_MAX, FOV_MIN, PITCH_LIMIT};
use lightbox_render::ClipPlanes;
use lightbox_scene::{Light, Material, Scene};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".into(),
            width: 800,
            height: 600,
        }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraDefaults,
    pub clip: ClipPlanes,
    pub light: Light,
    pub material: Material,
}

impl ViewerConfig {
    /// Load and validate a config file. The format follows the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let json = match ext.as_str() {
            "yaml" | "yml" => false,
            "json" => true,
            _ => return Err(ConfigError::UnsupportedFormat(ext)),
        };
        let text = std::fs::read_to_string(path)?;
        let config: Self = if json {
            serde_json::from_str(&text)?
        } else {
            serde_yaml::from_str(&text)?
        };
        config.validate()?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.clip.near > 0.0 && self.clip.far > self.clip.near) {
            return Err(ConfigError::Invalid(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.clip.near, self.clip.far
            )));
        }
        let camera = &self.camera;
        let finite = camera.position.is_finite()
            && camera.yaw.is_finite()
            && camera.move_speed.is_finite()
            && camera.look_sensitivity.is_finite();
        if !finite {
            return Err(ConfigError::Invalid(format!(
                "camera values must be finite, got {camera:?}"
            )));
        }
        if !(FOV_MIN..=FOV_MAX).contains(&self.camera.fov) {
            return Err(ConfigError::Invalid(format!(
                "camera fov {} outside [{FOV_MIN}, {FOV_MAX}]",
                self.camera.fov
            )));
        }
        if !(-PITCH_LIMIT..=PITCH_LIMIT).contains(&self.camera.pitch) {
            return Err(ConfigError::Invalid(format!(
                "camera pitch {} outside [-{PITCH_LIMIT}, {PITCH_LIMIT}]",
                self.camera.pitch
            )));
        }
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }

    /// Build the scene, remembering these values as its reset target.
    pub fn scene(&self) -> Scene {
        Scene::new(self.light, self.material)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = ViewerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.fov, 45.0);
        assert!((config.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let file = write_temp(
            ".yaml",
            "window:\n  width: 1280\ncamera:\n  yaw: -90.0\n  pitch: 0.0\n",
        );
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.camera.yaw, -90.0);
        assert_eq!(config.camera.move_speed, 2.5);
        assert_eq!(config.material, Material::default());
    }

    #[test]
    fn json_config_loads() {
        let file = write_temp(
            ".json",
            r#"{"light": {"position": [0.0, 3.0, 0.0]}, "clip": {"far": 50.0}}"#,
        );
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.light.position, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(config.clip.far, 50.0);
        assert_eq!(config.clip.near, 0.1);
    }

    #[test]
    fn unknown_extension_rejected() {
        let file = write_temp(".toml", "x = 1");
        let err = ViewerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn extension_checked_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ViewerConfig::load("/nonexistent/lightbox.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let file = write_temp(".yml", "window: [unclosed");
        let err = ViewerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn invalid_values_rejected() {
        let mut config = ViewerConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.clip.far = 0.05;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.camera.fov = 150.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.camera.pitch = -90.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.camera.yaw = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.camera.position.x = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ViewerConfig::default();
        config.camera.move_speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn yaml_dump_reloads() {
        let mut config = ViewerConfig::default();
        config.camera.position = Vec3::new(1.0, 2.0, 3.0);
        let text = config.to_yaml().unwrap();
        let file = write_temp(".yaml", &text);
        assert_eq!(ViewerConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn scene_resets_to_configured_light() {
        let mut config = ViewerConfig::default();
        config.light.diffuse_intensity = 0.9;
        let mut scene = config.scene();
        scene.light.diffuse_intensity = 0.1;
        scene.reset_lighting();
        assert_eq!(scene.light.diffuse_intensity, 0.9);
    }

    #[test]
    fn load_or_default_without_path() {
        let config = ViewerConfig::load_or_default(None).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }
}
