//! # Scene Description
//!
//! Declarative, renderer-agnostic description of the stage built from a
//! [`SceneConfig`]: camera, fog, lights, backdrop effects and the mesh.
//!
//! ## Key Types
//! - `SceneDescription`: Everything a renderer needs besides the per-frame pose.
//! - `Geometry`: Primitive and its construction arguments for each `ShapeType`.
//! - `MaterialDescription`: Shading parameters for each effective `MaterialType`.

use crate::color::HexColor;
use crate::config::{MaterialType, SceneConfig, ShapeType};
use glam::Vec3;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fog {
    pub color: HexColor,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    #[serde(rename_all = "camelCase")]
    Spot {
        position: Vec3,
        angle: f32,
        penumbra: f32,
        intensity: f32,
        color: HexColor,
        cast_shadow: bool,
    },
    Point {
        position: Vec3,
        intensity: f32,
        color: HexColor,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StarField {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub factor: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactShadows {
    pub resolution: u32,
    pub scale: f32,
    pub blur: f32,
    pub opacity: f32,
    pub far: f32,
    pub color: HexColor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    #[serde(rename_all = "camelCase")]
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    #[serde(rename_all = "camelCase")]
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    },
    Octahedron {
        radius: f32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
}

impl Geometry {
    pub fn for_shape(shape: ShapeType) -> Self {
        match shape {
            ShapeType::Box => Geometry::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            ShapeType::Torus => Geometry::Torus {
                radius: 0.7,
                tube: 0.3,
                radial_segments: 16,
                tubular_segments: 100,
            },
            ShapeType::Knot => Geometry::TorusKnot {
                radius: 0.6,
                tube: 0.2,
                tubular_segments: 100,
                radial_segments: 16,
            },
            ShapeType::Octahedron => Geometry::Octahedron { radius: 1.0 },
            ShapeType::Icosahedron => Geometry::Icosahedron {
                radius: 1.0,
                detail: 0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MaterialDescription {
    Standard {
        color: HexColor,
        metalness: f32,
        roughness: f32,
    },
    #[serde(rename_all = "camelCase")]
    Wireframe {
        color: HexColor,
        emissive: HexColor,
        emissive_intensity: f32,
    },
    /// Glass-like transmission material.
    #[serde(rename_all = "camelCase")]
    Transmission {
        color: HexColor,
        metalness: f32,
        roughness: f32,
        thickness: f32,
        backside: bool,
        backside_thickness: f32,
        chromatic_aberration: f32,
        anisotropy: f32,
    },
}

impl MaterialDescription {
    pub fn from_config(config: &SceneConfig) -> Self {
        match config.material.effective() {
            MaterialType::Wireframe => MaterialDescription::Wireframe {
                color: config.color.clone(),
                emissive: config.color.clone(),
                emissive_intensity: 0.5,
            },
            MaterialType::Physical => MaterialDescription::Transmission {
                color: config.color.clone(),
                metalness: config.metalness,
                roughness: config.roughness,
                thickness: 0.5,
                backside: true,
                backside_thickness: 1.0,
                chromatic_aberration: 0.1,
                anisotropy: 0.1,
            },
            MaterialType::Standard | MaterialType::Normal => MaterialDescription::Standard {
                color: config.color.clone(),
                metalness: config.metalness,
                roughness: config.roughness,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshDescription {
    pub geometry: Geometry,
    pub material: MaterialDescription,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub background: HexColor,
    pub camera: Camera,
    pub fog: Fog,
    pub lights: Vec<Light>,
    pub environment_preset: &'static str,
    pub stars: StarField,
    pub contact_shadows: ContactShadows,
    pub mesh: MeshDescription,
}

impl SceneDescription {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            background: config.bg_color.clone(),
            camera: Camera {
                position: Vec3::new(0.0, 0.0, 8.0),
                fov_degrees: 45.0,
            },
            fog: Fog {
                color: config.bg_color.clone(),
                near: 5.0,
                far: 25.0,
            },
            lights: vec![
                Light::Ambient { intensity: 0.5 },
                Light::Spot {
                    position: Vec3::splat(10.0),
                    angle: 0.15,
                    penumbra: 1.0,
                    intensity: config.light_intensity,
                    color: config.light_color.clone(),
                    cast_shadow: true,
                },
                // Fill light tinted by the object itself.
                Light::Point {
                    position: Vec3::splat(-10.0),
                    intensity: config.light_intensity * 0.5,
                    color: config.color.clone(),
                },
            ],
            environment_preset: "city",
            stars: StarField {
                radius: 100.0,
                depth: 50.0,
                count: 5000,
                factor: 4.0,
            },
            contact_shadows: ContactShadows {
                resolution: 1024,
                scale: 10.0,
                blur: 2.5,
                opacity: 0.5,
                far: 10.0,
                color: HexColor::from_literal("#000000"),
            },
            mesh: MeshDescription {
                geometry: Geometry::for_shape(config.shape),
                material: MaterialDescription::from_config(config),
                cast_shadow: true,
                receive_shadow: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_material_falls_back_to_standard() {
        let config = SceneConfig {
            material: MaterialType::Normal,
            ..SceneConfig::default()
        };
        let standard = SceneConfig {
            material: MaterialType::Standard,
            ..SceneConfig::default()
        };
        assert_eq!(
            MaterialDescription::from_config(&config),
            MaterialDescription::from_config(&standard)
        );
    }

    #[test]
    fn lights_follow_the_config() {
        let config = SceneConfig {
            light_intensity: 3.0,
            ..SceneConfig::default()
        };
        let scene = SceneDescription::from_config(&config);
        assert!(scene.lights.iter().any(|l| matches!(
            l,
            Light::Spot { intensity, .. } if *intensity == 3.0
        )));
        assert!(scene.lights.iter().any(|l| matches!(
            l,
            Light::Point { intensity, color, .. } if *intensity == 1.5 && *color == config.color
        )));
        assert_eq!(scene.fog.color, config.bg_color);
    }

    #[test]
    fn every_shape_has_geometry() {
        for shape in ShapeType::ALL {
            let json = serde_json::to_value(Geometry::for_shape(shape)).unwrap();
            assert!(json["type"].is_string());
        }
        assert_eq!(
            serde_json::to_value(Geometry::for_shape(ShapeType::Knot)).unwrap()["type"],
            "torusKnot"
        );
    }
}
