//! # Prism Core
//!
//! Configuration state and the presentation shell around `prism-motion`.
//!
//! ## Modules
//! - `config`: `SceneConfig`, shapes, materials, slider ranges and panel edits.
//! - `color`: Validated `#rrggbb` colors.
//! - `theme`: Generated theme payloads, validation and merge.
//! - `presets`: Built-in whole-config themes.
//! - `scroll`: Scroll container metrics and narrative sections.
//! - `scene`: Declarative stage description for renderers.
//! - `animation`: Keyframe-driven tweens (background fade).
//! - `shell`: `PresentationShell`, the per-frame entry point for hosts.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod presets;
pub mod scene;
pub mod scroll;
pub mod shell;
pub mod theme;

pub use color::{HexColor, Rgb};
pub use config::{ConfigField, FieldRange, MaterialType, SceneConfig, ShapeType};
pub use error::ConfigError;
pub use presets::{builtin_presets, find_preset, ThemePreset};
pub use scene::SceneDescription;
pub use scroll::{section_at, ScrollMetrics, Section, SECTIONS};
pub use shell::{FrameOutput, PresentationShell, ThemeOutcome, THEME_FAILURE_MESSAGE};
pub use theme::{AiThemeResponse, ThemeConfigPatch, ValidatedPatch};

pub use prism_motion;
