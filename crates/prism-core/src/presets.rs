//! Built-in themes that replace the whole config at once.

use crate::color::HexColor;
use crate::config::{MaterialType, SceneConfig, ShapeType};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemePreset {
    pub name: &'static str,
    pub config: SceneConfig,
}

/// The preset library, starting with the initial scene.
pub fn builtin_presets() -> Vec<ThemePreset> {
    vec![
        ThemePreset {
            name: "Amethyst",
            config: SceneConfig::default(),
        },
        ThemePreset {
            name: "Molten Gold",
            config: SceneConfig {
                shape: ShapeType::Knot,
                color: HexColor::from_literal("#f5b700"),
                metalness: 0.9,
                roughness: 0.25,
                rotation_speed: 0.8,
                scale: 1.4,
                material: MaterialType::Standard,
                bg_color: HexColor::from_literal("#1a0f05"),
                light_color: HexColor::from_literal("#ffd29a"),
                light_intensity: 2.2,
            },
        },
        ThemePreset {
            name: "Blueprint",
            config: SceneConfig {
                shape: ShapeType::Octahedron,
                color: HexColor::from_literal("#38bdf8"),
                metalness: 0.0,
                roughness: 1.0,
                rotation_speed: 0.3,
                scale: 1.8,
                material: MaterialType::Wireframe,
                bg_color: HexColor::from_literal("#06162b"),
                light_color: HexColor::from_literal("#e0f2fe"),
                light_intensity: 1.2,
            },
        },
    ]
}

/// Looks a preset up by name, ignoring case.
pub fn find_preset(name: &str) -> Option<ThemePreset> {
    builtin_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_within_panel_ranges() {
        for preset in builtin_presets() {
            let mut clamped = preset.config.clone();
            clamped.clamp_ranges();
            assert_eq!(clamped, preset.config, "{} is out of range", preset.name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_preset("molten gold").map(|p| p.name), Some("Molten Gold"));
        assert!(find_preset("Nope").is_none());
    }
}
