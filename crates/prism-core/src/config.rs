//! # Scene Configuration
//!
//! The editable parameter set behind the side panel.
//!
//! ## Responsibilities
//! - **Schema**: `SceneConfig` with camelCase serde names matching the panel fields.
//! - **Ranges**: Slider bounds for every numeric field.
//! - **Panel Edits**: Field-by-name updates that parse, validate and clamp before writing.
//! - **Motion Parameters**: Projection of the config onto what the motion engine reads.

use crate::color::HexColor;
use crate::error::ConfigError;
use prism_motion::MotionParameters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Geometry primitive of the displayed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ShapeType {
    Box,
    Torus,
    Icosahedron,
    Octahedron,
    Knot,
}

impl ShapeType {
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Box,
        ShapeType::Torus,
        ShapeType::Icosahedron,
        ShapeType::Octahedron,
        ShapeType::Knot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Box => "Box",
            ShapeType::Torus => "Torus",
            ShapeType::Icosahedron => "Icosahedron",
            ShapeType::Octahedron => "Octahedron",
            ShapeType::Knot => "Knot",
        }
    }
}

/// Shading mode of the displayed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MaterialType {
    Standard,
    Physical,
    /// Accepted but has no rendering of its own; renders as `Standard`.
    Normal,
    Wireframe,
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Standard,
        MaterialType::Physical,
        MaterialType::Normal,
        MaterialType::Wireframe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MaterialType::Standard => "Standard",
            MaterialType::Physical => "Physical",
            MaterialType::Normal => "Normal",
            MaterialType::Wireframe => "Wireframe",
        }
    }

    /// The mode actually rendered.
    pub fn effective(&self) -> MaterialType {
        match self {
            MaterialType::Normal => MaterialType::Standard,
            other => *other,
        }
    }
}

macro_rules! impl_name_parsing {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ConfigError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

impl_name_parsing!(ShapeType, "shape");
impl_name_parsing!(MaterialType, "material");

/// Inclusive slider bounds for a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl FieldRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

pub const METALNESS_RANGE: FieldRange = FieldRange::new(0.0, 1.0, 0.05);
pub const ROUGHNESS_RANGE: FieldRange = FieldRange::new(0.0, 1.0, 0.05);
pub const ROTATION_SPEED_RANGE: FieldRange = FieldRange::new(0.0, 5.0, 0.1);
pub const SCALE_RANGE: FieldRange = FieldRange::new(0.5, 3.0, 0.1);
pub const LIGHT_INTENSITY_RANGE: FieldRange = FieldRange::new(0.0, 5.0, 0.1);

/// Names of the editable fields, as used on the wire and by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Shape,
    Color,
    Metalness,
    Roughness,
    RotationSpeed,
    Scale,
    Material,
    BgColor,
    LightColor,
    LightIntensity,
}

impl ConfigField {
    pub const ALL: [ConfigField; 10] = [
        ConfigField::Shape,
        ConfigField::Color,
        ConfigField::Metalness,
        ConfigField::Roughness,
        ConfigField::RotationSpeed,
        ConfigField::Scale,
        ConfigField::Material,
        ConfigField::BgColor,
        ConfigField::LightColor,
        ConfigField::LightIntensity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::Shape => "shape",
            ConfigField::Color => "color",
            ConfigField::Metalness => "metalness",
            ConfigField::Roughness => "roughness",
            ConfigField::RotationSpeed => "rotationSpeed",
            ConfigField::Scale => "scale",
            ConfigField::Material => "material",
            ConfigField::BgColor => "bgColor",
            ConfigField::LightColor => "lightColor",
            ConfigField::LightIntensity => "lightIntensity",
        }
    }

    /// Slider bounds, for numeric fields only.
    pub fn range(&self) -> Option<FieldRange> {
        match self {
            ConfigField::Metalness => Some(METALNESS_RANGE),
            ConfigField::Roughness => Some(ROUGHNESS_RANGE),
            ConfigField::RotationSpeed => Some(ROTATION_SPEED_RANGE),
            ConfigField::Scale => Some(SCALE_RANGE),
            ConfigField::LightIntensity => Some(LIGHT_INTENSITY_RANGE),
            _ => None,
        }
    }
}

impl FromStr for ConfigField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}

/// Full parameter set for the rendered object, its material and lighting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub shape: ShapeType,
    /// Object color, `#rrggbb`.
    #[schemars(with = "String")]
    pub color: HexColor,
    pub metalness: f32,
    pub roughness: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub material: MaterialType,
    /// Background and fog color, `#rrggbb`.
    #[schemars(with = "String")]
    pub bg_color: HexColor,
    /// Key light color, `#rrggbb`.
    #[schemars(with = "String")]
    pub light_color: HexColor,
    pub light_intensity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: ShapeType::Icosahedron,
            color: HexColor::from_literal("#8b5cf6"),
            metalness: 0.1,
            roughness: 0.2,
            rotation_speed: 0.5,
            scale: 1.5,
            material: MaterialType::Physical,
            bg_color: HexColor::from_literal("#0f0f13"),
            light_color: HexColor::from_literal("#ffffff"),
            light_intensity: 1.5,
        }
    }
}

impl SceneConfig {
    /// Loads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: SceneConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.clamp_ranges();
        Ok(config)
    }

    /// What the motion engine reads each frame.
    pub fn motion_parameters(&self) -> MotionParameters {
        MotionParameters::new(self.rotation_speed, self.scale)
    }

    /// Forces every numeric field into its slider range. Non-finite values reset to the default.
    pub fn clamp_ranges(&mut self) {
        let defaults = SceneConfig::default();
        let fit = |value: f32, range: FieldRange, fallback: f32| {
            if value.is_finite() {
                range.clamp(value)
            } else {
                fallback
            }
        };
        self.metalness = fit(self.metalness, METALNESS_RANGE, defaults.metalness);
        self.roughness = fit(self.roughness, ROUGHNESS_RANGE, defaults.roughness);
        self.rotation_speed = fit(
            self.rotation_speed,
            ROTATION_SPEED_RANGE,
            defaults.rotation_speed,
        );
        self.scale = fit(self.scale, SCALE_RANGE, defaults.scale);
        self.light_intensity = fit(
            self.light_intensity,
            LIGHT_INTENSITY_RANGE,
            defaults.light_intensity,
        );
    }

    /// Applies a single panel edit given as raw text.
    ///
    /// Numeric fields are parsed as floats and clamped to their slider range,
    /// colors must be `#rrggbb`, enum fields must name a variant. On error the
    /// config is left untouched.
    pub fn apply_edit(&mut self, field: &str, value: &str) -> Result<ConfigField, ConfigError> {
        let field: ConfigField = field.parse()?;
        match field {
            ConfigField::Shape => self.shape = value.parse()?,
            ConfigField::Material => self.material = value.parse()?,
            ConfigField::Color => self.color = HexColor::parse_for(field.name(), value)?,
            ConfigField::BgColor => self.bg_color = HexColor::parse_for(field.name(), value)?,
            ConfigField::LightColor => {
                self.light_color = HexColor::parse_for(field.name(), value)?
            }
            ConfigField::Metalness
            | ConfigField::Roughness
            | ConfigField::RotationSpeed
            | ConfigField::Scale
            | ConfigField::LightIntensity => {
                let number = parse_number(field, value)?;
                self.set_number(field, number);
            }
        }
        debug!(field = field.name(), value, "config edited");
        Ok(field)
    }

    fn set_number(&mut self, field: ConfigField, value: f32) {
        let value = field.range().map_or(value, |r| r.clamp(value));
        match field {
            ConfigField::Metalness => self.metalness = value,
            ConfigField::Roughness => self.roughness = value,
            ConfigField::RotationSpeed => self.rotation_speed = value,
            ConfigField::Scale => self.scale = value,
            ConfigField::LightIntensity => self.light_intensity = value,
            _ => {}
        }
    }
}

fn parse_number(field: ConfigField, value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            field: field.name().to_string(),
            value: value.to_string(),
        })
}
