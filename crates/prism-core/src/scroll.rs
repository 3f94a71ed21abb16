//! Scroll container geometry and the narrative sections it scrolls through.

use serde::{Deserialize, Serialize};

/// Smallest scrollable range; guards the division for containers that cannot scroll.
const MIN_SCROLL_RANGE: f32 = 1e-6;

/// Raw measurements of the scroll container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Normalized progress in `[0, 1]`. A container with nothing to scroll reports `0`.
    pub fn progress(&self) -> f32 {
        let range = self.scroll_height - self.client_height;
        if !(range > MIN_SCROLL_RANGE) || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

/// Where the object sits while a section is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Right,
    Left,
    Center,
}

/// One full-height page of the narrative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
    pub placement: Placement,
    /// Scroll progress at which the section is snapped into view.
    pub anchor: f32,
}

pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Abstract Beauty",
        body: "Discover the power of generative 3D design. A fusion of geometry, light, and material that responds to your creativity.",
        placement: Placement::Right,
        anchor: 0.0,
    },
    Section {
        title: "Geometric Harmony",
        body: "Control the chaos. Adjust materials, tweak the lighting, and find the perfect balance for your digital masterpiece.",
        placement: Placement::Left,
        anchor: 0.5,
    },
    Section {
        title: "Pure Form",
        body: "Ready to create? Open the controls and let AI generate your next visual theme.",
        placement: Placement::Center,
        anchor: 1.0,
    },
];

/// The section whose anchor is nearest to `progress`.
pub fn section_at(progress: f32) -> &'static Section {
    let p = if progress.is_finite() { progress } else { 0.0 };
    SECTIONS
        .iter()
        .min_by(|a, b| {
            (a.anchor - p)
                .abs()
                .total_cmp(&(b.anchor - p).abs())
        })
        .unwrap_or(&SECTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_normalized_and_clamped() {
        assert_eq!(ScrollMetrics::new(0.0, 3000.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(1000.0, 3000.0, 1000.0).progress(), 0.5);
        assert_eq!(ScrollMetrics::new(2000.0, 3000.0, 1000.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(2600.0, 3000.0, 1000.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(-40.0, 3000.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn unscrollable_container_reports_zero() {
        assert_eq!(ScrollMetrics::new(10.0, 800.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, 500.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
        assert_eq!(ScrollMetrics::new(f32::NAN, 3000.0, 1000.0).progress(), 0.0);
    }

    #[test]
    fn nearest_section_wins() {
        assert_eq!(section_at(0.1).title, "Abstract Beauty");
        assert_eq!(section_at(0.45).placement, Placement::Left);
        assert_eq!(section_at(0.9).placement, Placement::Center);
    }
}
