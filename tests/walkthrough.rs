//! A full visit: scroll through all three sections, tweak the panel, ask for a theme.
//!
//! Run with: cargo test -p prism-designer --test walkthrough

use async_trait::async_trait;
use prism_designer::core::{AiThemeResponse, ScrollMetrics, ShapeType};
use prism_designer::motion::WaypointPath;
use prism_designer::theme::{ThemeError, ThemeGenerator, ThemeService};
use prism_designer::PresentationShell;
use serde_json::json;
use std::sync::Arc;

const FRAME: f32 = 1.0 / 60.0;

struct Sunset;

#[async_trait]
impl ThemeGenerator for Sunset {
    async fn generate(&self, _prompt: &str) -> Result<AiThemeResponse, ThemeError> {
        Ok(serde_json::from_value(json!({
            "themeName": "Sunset Drive",
            "description": "Magenta glass over a dusk sky",
            "config": {
                "color": "#ff3399",
                "bgColor": "#2a0a1f",
                "metalness": 0.4,
                "roughness": 0.15,
                "shape": "Knot",
                "rotationSpeed": 1.2
            }
        }))?)
    }
}

fn settle(shell: &mut PresentationShell, seconds: f32) -> prism_designer::core::FrameOutput {
    let mut frame = shell.step(FRAME);
    for _ in 0..(seconds / FRAME) as usize {
        frame = shell.step(FRAME);
    }
    frame
}

#[tokio::test]
async fn scroll_edit_and_theme() -> anyhow::Result<()> {
    let mut shell = PresentationShell::default();
    let page = |top: f32| ScrollMetrics::new(top, 3000.0, 1000.0);

    let frame = settle(&mut shell, 1.0);
    assert_eq!(frame.section, "Abstract Beauty");
    assert!(frame.pose.position.distance(WaypointPath::RIGHT) < 1e-3);

    shell.on_scroll(page(1000.0));
    let frame = settle(&mut shell, 20.0);
    assert_eq!(frame.section, "Geometric Harmony");
    // Halfway: on the left waypoint, pushed forward by the full arc.
    assert!((frame.pose.position.x - WaypointPath::LEFT.x).abs() < 1e-2);
    assert!((frame.pose.position.z - 1.5).abs() < 1e-2);

    shell.edit("shape", "Torus")?;
    assert_eq!(shell.config().shape, ShapeType::Torus);

    let service = ThemeService::new(Arc::new(Sunset));
    let theme = service.generate_or_none("dusk highway").await;
    let outcome = shell.apply_theme_result(theme);
    assert_eq!(outcome.message(), "Applied theme: Sunset Drive");
    assert_eq!(shell.config().shape, ShapeType::Knot);
    assert_eq!(shell.config().rotation_speed, 1.2);
    assert_eq!(shell.config().scale, 1.5);

    shell.on_scroll(page(2000.0));
    let frame = settle(&mut shell, 20.0);
    assert_eq!(frame.section, "Pure Form");
    assert!(frame.pose.position.distance(WaypointPath::CENTER) < 1e-3);
    Ok(())
}

