use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Uniform scale applied to the cube that marks the light position.
pub const LIGHT_CUBE_SCALE: f32 = 0.2;

/// Point light with a base color and per-term intensities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    pub specular_intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.2, 1.0, 2.0),
            color: Vec3::ONE,
            ambient_intensity: 0.2,
            diffuse_intensity: 0.5,
            specular_intensity: 1.0,
        }
    }
}

/// Light colors per Phong term, ready for upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    /// Ambient is a fraction of the diffuse color, not of the base color.
    pub fn terms(&self) -> PhongTerms {
        let diffuse = self.color * self.diffuse_intensity;
        PhongTerms {
            ambient: diffuse * self.ambient_intensity,
            diffuse,
            specular: Vec3::splat(self.specular_intensity),
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(LIGHT_CUBE_SCALE))
    }
}

/// Surface reflectance of the lit cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::new(1.0, 0.5, 0.31),
            diffuse: Vec3::new(1.0, 0.5, 0.31),
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }
}

/// Everything the renderer draws besides the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub light: Light,
    pub material: Material,
    /// Values restored by [`Scene::reset_lighting`].
    defaults: (Light, Material),
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Light::default(), Material::default())
    }
}

impl Scene {
    pub fn new(light: Light, material: Material) -> Self {
        Self {
            light,
            material,
            defaults: (light, material),
        }
    }

    /// Restore light and material to the values the scene was built with.
    pub fn reset_lighting(&mut self) {
        (self.light, self.material) = self.defaults;
        tracing::debug!("lighting reset to defaults");
    }

    /// The lit cube sits at the origin, unscaled.
    pub fn cube_model_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_terms() {
        let terms = Light::default().terms();
        assert_eq!(terms.diffuse, Vec3::splat(0.5));
        assert!(terms.ambient.abs_diff_eq(Vec3::splat(0.1), 1e-6));
        assert_eq!(terms.specular, Vec3::ONE);
    }

    #[test]
    fn terms_follow_light_color() {
        let light = Light {
            color: Vec3::new(1.0, 0.0, 0.5),
            diffuse_intensity: 1.0,
            ambient_intensity: 0.5,
            specular_intensity: 0.25,
            ..Light::default()
        };
        let terms = light.terms();
        assert_eq!(terms.diffuse, Vec3::new(1.0, 0.0, 0.5));
        assert_eq!(terms.ambient, Vec3::new(0.5, 0.0, 0.25));
        assert_eq!(terms.specular, Vec3::splat(0.25));
    }

    #[test]
    fn light_model_matrix_places_small_cube() {
        let light = Light::default();
        let m = light.model_matrix();
        let corner = m.transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(light.position + Vec3::splat(0.1), 1e-6));
    }

    #[test]
    fn reset_lighting_restores_defaults() {
        let mut scene = Scene::default();
        scene.light.color = Vec3::ZERO;
        scene.light.position = Vec3::splat(9.0);
        scene.material.shininess = 256.0;
        scene.reset_lighting();
        assert_eq!(scene.light, Light::default());
        assert_eq!(scene.material, Material::default());
    }

    #[test]
    fn reset_lighting_uses_construction_values() {
        let light = Light {
            position: Vec3::new(-2.0, 3.0, 0.0),
            ..Light::default()
        };
        let mut scene = Scene::new(light, Material::default());
        scene.light.position = Vec3::ZERO;
        scene.reset_lighting();
        assert_eq!(scene.light.position, Vec3::new(-2.0, 3.0, 0.0));
    }
}
