//! # Presentation Shell
//!
//! Owns the live configuration and wires it to the motion engine.
//!
//! ## Responsibilities
//! - **Scroll**: Converts container metrics to a fraction and writes the shared `ScrollSignal`.
//! - **Frames**: Ticks the clock, advances the engine, samples the idle float and background fade.
//! - **Editing**: Panel edits, presets and whole-config replacement.
//! - **Themes**: Turns a generated theme (or its absence) into a merged config and a status message.

use crate::animation::{Animated, EasingType, BACKGROUND_FADE_SECONDS};
use crate::color::Rgb;
use crate::config::{ConfigField, SceneConfig};
use crate::error::ConfigError;
use crate::presets::find_preset;
use crate::scene::SceneDescription;
use crate::scroll::{section_at, ScrollMetrics};
use crate::theme::AiThemeResponse;
use prism_motion::{FloatMotion, FloatOffset, FrameClock, FrameTime, MotionEngine, Pose, ScrollSignal};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Message shown when a theme request produced nothing usable.
pub const THEME_FAILURE_MESSAGE: &str = "Failed to generate theme. Try a different prompt.";

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub elapsed: f64,
    pub dt: f32,
    pub scroll: f32,
    pub progress: f32,
    pub section: &'static str,
    pub pose: Pose,
    /// Parent-group transform from the idle float.
    pub float: FloatOffset,
    pub background: Rgb,
}

/// Result of handing a theme response to the shell.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ThemeOutcome {
    #[serde(rename_all = "camelCase")]
    Applied {
        theme_name: String,
        description: String,
    },
    Failed,
}

impl ThemeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ThemeOutcome::Applied { .. })
    }

    /// Short inline text for the panel.
    pub fn message(&self) -> String {
        match self {
            ThemeOutcome::Applied { theme_name, .. } => format!("Applied theme: {}", theme_name),
            ThemeOutcome::Failed => THEME_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub struct PresentationShell {
    config: SceneConfig,
    signal: Arc<ScrollSignal>,
    engine: MotionEngine,
    float: FloatMotion,
    clock: FrameClock,
    background: Animated<Rgb>,
    last_message: Option<String>,
}

impl Default for PresentationShell {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl PresentationShell {
    pub fn new(mut config: SceneConfig) -> Self {
        config.clamp_ranges();
        let background = Animated::new(config.bg_color.to_rgb());
        Self {
            config,
            signal: Arc::new(ScrollSignal::new()),
            engine: MotionEngine::new(),
            float: FloatMotion::with_random_offset(),
            clock: FrameClock::new(),
            background,
            last_message: None,
        }
    }

    pub fn with_engine(mut self, engine: MotionEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_float(mut self, float: FloatMotion) -> Self {
        self.float = float;
        self
    }

    pub fn float(&self) -> &FloatMotion {
        &self.float
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    pub fn scene(&self) -> SceneDescription {
        SceneDescription::from_config(&self.config)
    }

    /// Handle for an input source that writes scroll progress from elsewhere.
    pub fn scroll_signal(&self) -> Arc<ScrollSignal> {
        self.signal.clone()
    }

    /// Records a scroll event and returns the fraction written.
    pub fn on_scroll(&self, metrics: ScrollMetrics) -> f32 {
        let progress = metrics.progress();
        self.signal.set(progress);
        progress
    }

    pub fn set_scroll(&self, fraction: f32) {
        self.signal.set(fraction);
    }

    /// Renders a frame at absolute timestamp `now` (seconds).
    pub fn frame_at(&mut self, now: f64) -> FrameOutput {
        let time = self.clock.tick_at(now);
        self.frame(time)
    }

    /// Renders a frame `dt` seconds after the previous one.
    pub fn step(&mut self, dt: f32) -> FrameOutput {
        let time = self.clock.advance_by(dt);
        self.frame(time)
    }

    fn frame(&mut self, time: FrameTime) -> FrameOutput {
        let scroll = self.signal.get();
        let params = self.config.motion_parameters();
        let pose = self.engine.advance(time.dt, time.elapsed, scroll, &params);
        let progress = self.engine.progress();

        FrameOutput {
            elapsed: time.elapsed,
            dt: time.dt,
            scroll,
            progress,
            section: section_at(progress).title,
            pose,
            float: self.float.sample(time.elapsed),
            background: self.background.update(time.elapsed),
        }
    }

    /// Applies a panel edit. Invalid input leaves the config unchanged.
    pub fn edit(&mut self, field: &str, value: &str) -> Result<ConfigField, ConfigError> {
        let field = self.config.apply_edit(field, value)?;
        if field == ConfigField::BgColor {
            self.fade_background();
        }
        Ok(field)
    }

    /// Replaces the whole config, clamping it into the panel ranges.
    pub fn set_config(&mut self, mut config: SceneConfig) {
        config.clamp_ranges();
        let bg_changed = config.bg_color != self.config.bg_color;
        self.config = config;
        if bg_changed {
            self.fade_background();
        }
    }

    pub fn apply_preset(&mut self, name: &str) -> Result<(), ConfigError> {
        let preset = find_preset(name).ok_or_else(|| ConfigError::UnknownVariant {
            kind: "preset",
            value: name.to_string(),
        })?;
        info!(preset = preset.name, "applying preset");
        self.set_config(preset.config);
        Ok(())
    }

    /// Merges a theme response, or records a failure when there is none.
    ///
    /// A response that fails validation counts as a failure and does not
    /// touch the config.
    pub fn apply_theme_result(&mut self, result: Option<AiThemeResponse>) -> ThemeOutcome {
        let outcome = match result {
            Some(theme) => {
                let before = self.config.bg_color.clone();
                match self.config.apply_theme(&theme) {
                    Ok(()) => {
                        info!(theme = %theme.theme_name, "applied generated theme");
                        if self.config.bg_color != before {
                            self.fade_background();
                        }
                        ThemeOutcome::Applied {
                            theme_name: theme.theme_name,
                            description: theme.description,
                        }
                    }
                    Err(e) => {
                        warn!("rejected generated theme: {}", e);
                        ThemeOutcome::Failed
                    }
                }
            }
            None => ThemeOutcome::Failed,
        };
        self.last_message = Some(outcome.message());
        outcome
    }

    /// Status line from the most recent theme request.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    fn fade_background(&mut self) {
        self.background.retarget(
            self.config.bg_color.to_rgb(),
            self.clock.elapsed(),
            BACKGROUND_FADE_SECONDS,
            EasingType::EaseInOut,
        );
    }
}
