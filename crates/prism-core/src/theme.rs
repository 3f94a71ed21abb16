//! Generated theme payloads and their merge into a [`SceneConfig`].
//!
//! A theme arrives as a partial config. It is validated as a whole first;
//! only a fully valid patch is merged, as `{ ..old, ..patch }`.

use crate::color::HexColor;
use crate::config::{
    ConfigField, MaterialType, SceneConfig, ShapeType, LIGHT_INTENSITY_RANGE, METALNESS_RANGE,
    ROTATION_SPEED_RANGE, ROUGHNESS_RANGE, SCALE_RANGE,
};
use crate::error::ConfigError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Partial config as returned by the theme service.
///
/// `color`, `bgColor`, `metalness`, `roughness` and `shape` are mandatory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfigPatch {
    pub color: String,
    pub bg_color: String,
    pub metalness: f32,
    pub roughness: f32,
    pub shape: ShapeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// A generated theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiThemeResponse {
    pub theme_name: String,
    #[serde(default)]
    pub description: String,
    pub config: ThemeConfigPatch,
}

/// A patch whose colors parsed and whose numbers are finite and in range.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedPatch {
    pub color: HexColor,
    pub bg_color: HexColor,
    pub metalness: f32,
    pub roughness: f32,
    pub shape: ShapeType,
    pub light_color: Option<HexColor>,
    pub light_intensity: Option<f32>,
    pub material: Option<MaterialType>,
    pub rotation_speed: Option<f32>,
    pub scale: Option<f32>,
}

impl ThemeConfigPatch {
    /// Checks every field. Colors must be `#rrggbb`; numbers must be finite
    /// and are clamped to the panel's slider ranges.
    pub fn validate(&self) -> Result<ValidatedPatch, ConfigError> {
        let color = |field: ConfigField, value: &str| HexColor::parse_for(field.name(), value);

        Ok(ValidatedPatch {
            color: color(ConfigField::Color, &self.color)?,
            bg_color: color(ConfigField::BgColor, &self.bg_color)?,
            metalness: number(ConfigField::Metalness, self.metalness)?,
            roughness: number(ConfigField::Roughness, self.roughness)?,
            shape: self.shape,
            light_color: self
                .light_color
                .as_deref()
                .map(|v| color(ConfigField::LightColor, v))
                .transpose()?,
            light_intensity: self
                .light_intensity
                .map(|v| number(ConfigField::LightIntensity, v))
                .transpose()?,
            material: self.material,
            rotation_speed: self
                .rotation_speed
                .map(|v| number(ConfigField::RotationSpeed, v))
                .transpose()?,
            scale: self
                .scale
                .map(|v| number(ConfigField::Scale, v))
                .transpose()?,
        })
    }
}

fn number(field: ConfigField, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidNumber {
            field: field.name().to_string(),
            value: value.to_string(),
        });
    }
    let range = match field {
        ConfigField::Metalness => METALNESS_RANGE,
        ConfigField::Roughness => ROUGHNESS_RANGE,
        ConfigField::RotationSpeed => ROTATION_SPEED_RANGE,
        ConfigField::Scale => SCALE_RANGE,
        _ => LIGHT_INTENSITY_RANGE,
    };
    Ok(range.clamp(value))
}

impl SceneConfig {
    /// Returns `self` with every field present in `patch` replaced.
    pub fn merged_with(&self, patch: &ValidatedPatch) -> SceneConfig {
        SceneConfig {
            shape: patch.shape,
            color: patch.color.clone(),
            metalness: patch.metalness,
            roughness: patch.roughness,
            rotation_speed: patch.rotation_speed.unwrap_or(self.rotation_speed),
            scale: patch.scale.unwrap_or(self.scale),
            material: patch.material.unwrap_or(self.material),
            bg_color: patch.bg_color.clone(),
            light_color: patch
                .light_color
                .clone()
                .unwrap_or_else(|| self.light_color.clone()),
            light_intensity: patch.light_intensity.unwrap_or(self.light_intensity),
        }
    }

    /// Validates `theme` and merges it. On error nothing changes.
    pub fn apply_theme(&mut self, theme: &AiThemeResponse) -> Result<(), ConfigError> {
        let patch = theme.config.validate()?;
        *self = self.merged_with(&patch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn theme(config: serde_json::Value) -> AiThemeResponse {
        serde_json::from_value(json!({
            "themeName": "Test",
            "config": config,
        }))
        .unwrap()
    }

    #[test]
    fn description_is_optional() {
        let t = theme(json!({
            "color": "#ff0000", "bgColor": "#000000",
            "metalness": 0.2, "roughness": 0.8, "shape": "Torus"
        }));
        assert_eq!(t.description, "");
    }

    #[test]
    fn missing_required_field_does_not_parse() {
        let result = serde_json::from_value::<AiThemeResponse>(json!({
            "themeName": "No shape",
            "config": { "color": "#ff0000", "bgColor": "#000000", "metalness": 0.2, "roughness": 0.8 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn optional_fields_override_when_present() {
        let t = theme(json!({
            "color": "#ff0000", "bgColor": "#000000",
            "metalness": 0.2, "roughness": 0.8, "shape": "Knot",
            "lightColor": "#00ff00", "lightIntensity": 2.5,
            "material": "Wireframe", "rotationSpeed": 1.0, "scale": 2.0
        }));
        let mut config = SceneConfig::default();
        config.apply_theme(&t).unwrap();
        assert_eq!(config.light_color.as_str(), "#00ff00");
        assert_eq!(config.light_intensity, 2.5);
        assert_eq!(config.material, MaterialType::Wireframe);
        assert_eq!(config.rotation_speed, 1.0);
        assert_eq!(config.scale, 2.0);
    }

    #[test]
    fn invalid_optional_color_rejects_the_whole_patch() {
        let t = theme(json!({
            "color": "#ff0000", "bgColor": "#000000",
            "metalness": 0.2, "roughness": 0.8, "shape": "Box",
            "lightColor": "warm white"
        }));
        let mut config = SceneConfig::default();
        let err = config.apply_theme(&t).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref field, .. } if field == "lightColor"));
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let t = theme(json!({
            "color": "#ff0000", "bgColor": "#000000",
            "metalness": 1.4, "roughness": -0.3, "shape": "Box", "scale": 9.0
        }));
        let patch = t.config.validate().unwrap();
        assert_eq!(patch.metalness, 1.0);
        assert_eq!(patch.roughness, 0.0);
        assert_eq!(patch.scale, Some(3.0));
    }
}
