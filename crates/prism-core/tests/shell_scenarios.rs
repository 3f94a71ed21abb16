//! End-to-end behavior of the presentation shell.
//! Run with: cargo test -p prism-core --test shell_scenarios

use anyhow::Result;
use prism_core::prism_motion::{FloatMotion, WaypointPath};
use prism_core::{
    AiThemeResponse, ConfigError, HexColor, MaterialType, PresentationShell, SceneConfig,
    ScrollMetrics, ShapeType, ThemeOutcome, THEME_FAILURE_MESSAGE,
};
use serde_json::json;
use std::io::Write;

const FRAME: f32 = 1.0 / 60.0;

fn red_torus_theme() -> AiThemeResponse {
    serde_json::from_value(json!({
        "themeName": "Red Alert",
        "description": "Hot red on black",
        "config": {
            "color": "#ff0000",
            "bgColor": "#000000",
            "metalness": 0.2,
            "roughness": 0.8,
            "shape": "Torus"
        }
    }))
    .expect("fixture parses")
}

#[test]
fn scroll_jump_settles_on_center_with_configured_scale() {
    let config = SceneConfig {
        rotation_speed: 0.0,
        scale: 1.5,
        ..SceneConfig::default()
    };
    let mut shell = PresentationShell::new(config);
    shell.step(FRAME);

    let written = shell.on_scroll(ScrollMetrics::new(2000.0, 3000.0, 1000.0));
    assert_eq!(written, 1.0);

    let mut out = shell.step(FRAME);
    for _ in 0..1500 {
        out = shell.step(FRAME);
        assert_eq!(out.pose.scale, 1.5);
    }
    assert!((out.progress - 1.0).abs() < 1e-4);
    assert!(out.pose.position.distance(WaypointPath::CENTER) < 1e-3);
    assert_eq!(out.section, "Pure Form");
}

#[test]
fn theme_merges_exactly_the_fields_it_carries() {
    let mut shell = PresentationShell::default();
    let before = shell.config().clone();

    let outcome = shell.apply_theme_result(Some(red_torus_theme()));
    assert!(outcome.is_applied());
    assert_eq!(outcome.message(), "Applied theme: Red Alert");

    let after = shell.config();
    assert_eq!(after.color.as_str(), "#ff0000");
    assert_eq!(after.bg_color.as_str(), "#000000");
    assert_eq!(after.metalness, 0.2);
    assert_eq!(after.roughness, 0.8);
    assert_eq!(after.shape, ShapeType::Torus);

    assert_eq!(after.light_intensity, before.light_intensity);
    assert_eq!(after.light_color, before.light_color);
    assert_eq!(after.material, before.material);
    assert_eq!(after.rotation_speed, before.rotation_speed);
    assert_eq!(after.scale, before.scale);
}

#[test]
fn missing_theme_is_a_visible_failure_without_mutation() {
    let mut shell = PresentationShell::default();
    let before = shell.config().clone();

    let outcome = shell.apply_theme_result(None);
    assert_eq!(outcome, ThemeOutcome::Failed);
    assert!(!outcome.is_applied());
    assert_eq!(shell.last_message(), Some(THEME_FAILURE_MESSAGE));
    assert_eq!(shell.config(), &before);
}

#[test]
fn theme_with_bad_color_is_rejected_as_a_whole() {
    let mut shell = PresentationShell::default();
    let before = shell.config().clone();

    let mut theme = red_torus_theme();
    theme.config.bg_color = "#00000".to_string();
    let outcome = shell.apply_theme_result(Some(theme));

    assert_eq!(outcome, ThemeOutcome::Failed);
    assert_eq!(shell.config(), &before);
}

#[test]
fn background_fades_over_one_second_after_a_theme() {
    let mut shell = PresentationShell::default();
    shell.step(FRAME);
    shell.apply_theme_result(Some(red_torus_theme()));

    let mid = shell.step(0.5).background;
    assert!(mid.b > 0.0, "still fading, got {:?}", mid);

    let done = shell.step(0.6).background;
    assert_eq!(done.to_hex(), HexColor::try_from("#000000".to_string()).unwrap());
}

#[test]
fn panel_edits_drive_the_next_frame() {
    let mut shell = PresentationShell::default();
    shell.edit("scale", "2.4").unwrap();
    assert_eq!(shell.step(FRAME).pose.scale, 2.4);

    let err = shell.edit("lightColor", "white").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidColor { .. }));

    shell.edit("material", "Normal").unwrap();
    assert_eq!(shell.config().material, MaterialType::Normal);
}

#[test]
fn presets_replace_the_whole_config() {
    let mut shell = PresentationShell::default();
    shell.apply_preset("Blueprint").unwrap();
    assert_eq!(shell.config().material, MaterialType::Wireframe);
    assert!(shell.apply_preset("Unknown").is_err());
}

#[test]
fn paused_host_clock_freezes_rotation() {
    let mut shell = PresentationShell::default();
    shell.set_scroll(0.3);
    shell.frame_at(100.0);
    let a = shell.frame_at(101.0);
    let b = shell.frame_at(101.0);
    let c = shell.frame_at(101.0);
    assert_eq!(a.pose.rotation.y, b.pose.rotation.y);
    assert_eq!(b.pose.rotation.y, c.pose.rotation.y);
}

#[test]
fn config_file_round_trip() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        "{}",
        json!({
            "shape": "Knot",
            "color": "#112233",
            "metalness": 0.4,
            "roughness": 0.6,
            "rotationSpeed": 9.0,
            "scale": 1.0,
            "material": "Standard",
            "bgColor": "#000000",
            "lightColor": "#FFFFFF",
            "lightIntensity": 2.0
        })
    )?;

    let config = SceneConfig::from_json_file(file.path())?;
    assert_eq!(config.shape, ShapeType::Knot);
    assert_eq!(config.rotation_speed, 5.0);
    assert_eq!(config.light_color.as_str(), "#ffffff");
    Ok(())
}

#[test]
fn config_file_with_bad_color_fails_to_load() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", json!({ "shape": "Box", "color": "blue" }))?;
    let err = SceneConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    Ok(())
}

#[test]
fn each_shell_floats_with_its_own_phase() {
    let shells: Vec<_> = (0..8).map(|_| PresentationShell::default()).collect();
    for shell in &shells {
        assert!((0.0..10_000.0).contains(&shell.float().offset));
    }
    let first = shells[0].float().offset;
    assert!(shells.iter().any(|s| s.float().offset != first));
}

#[test]
fn level_float_can_be_pinned() {
    let mut shell = PresentationShell::default().with_float(FloatMotion::default());
    let frame = shell.step(0.0);
    assert_eq!(frame.float.position_y, 0.0);
    assert_eq!(shell.float().offset, 0.0);
}
