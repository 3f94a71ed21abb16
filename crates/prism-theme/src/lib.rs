//! # Prism Theme
//!
//! Generates scene themes from a free-text mood.
//!
//! ## Modules
//! - `client`: `ThemeClient` for the Gemini API or an external command.
//! - `generator`: The `ThemeGenerator` seam and `generate_theme_or_none`.
//! - `gate`: Single-flight request gate and `ThemeService`.
//! - `prompt`: Prompt text and response schema.
//! - `error`: `ThemeError` and its broad kinds.

pub mod client;
pub mod error;
pub mod gate;
pub mod generator;
pub mod prompt;

pub use client::{ThemeClient, ThemeClientConfig, ThemeProvider};
pub use error::{ThemeError, ThemeErrorKind};
pub use gate::{GateGuard, ThemeRequestGate, ThemeService};
pub use generator::{failure_report, generate_theme_or_none, log_failure, ThemeGenerator};
