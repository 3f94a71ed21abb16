//! # Prism Designer
//!
//! A scroll-driven 3D object configurator. Scroll progress steers a single
//! object along a three-waypoint spline while a side panel (or a generated
//! theme) edits its material, geometry and lighting.
//!
//! ## Crates
//! - [`motion`]: Damping, spline path, rotation composition and the per-frame `MotionEngine`.
//! - [`core`]: `SceneConfig`, panel edits, theme merge, scene description and `PresentationShell`.
//! - [`theme`]: Async theme client, single-flight gate and failure taxonomy.
//!
//! ```no_run
//! use prism_designer::core::{PresentationShell, ScrollMetrics};
//!
//! let mut shell = PresentationShell::default();
//! shell.on_scroll(ScrollMetrics::new(1000.0, 3000.0, 1000.0));
//! let frame = shell.step(1.0 / 60.0);
//! println!("{:?}", frame.pose);
//! ```

pub use prism_core as core;
pub use prism_motion as motion;
pub use prism_theme as theme;

pub use prism_core::{PresentationShell, SceneConfig};
pub use prism_motion::{MotionEngine, MotionParameters, Pose};
