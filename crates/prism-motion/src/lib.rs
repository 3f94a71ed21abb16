//! # Prism Motion
//!
//! Converts a raw scroll fraction into a smoothed, per-frame object pose.
//!
//! ## Responsibilities
//! - **Damping**: Frame-rate independent exponential smoothing of scroll progress.
//! - **Rotation**: Absolute-time rotation composed with a scroll-driven spin and a velocity tilt.
//! - **Path**: Catmull-Rom curve through the right → left → center waypoints plus wave/arc offsets.
//! - **Frame Loop**: `MotionEngine::advance`, called once per rendered frame.
//!
//! ## Key Types
//! - `MotionEngine`: Owns the smoothed progress, the only state carried across frames.
//! - `ScrollSignal`: Shared last-writer-wins cell fed by scroll events.
//! - `Pose`: Position, Euler rotation and uniform scale for one frame.

pub mod clock;
pub mod damping;
pub mod engine;
pub mod float;
pub mod path;
pub mod pose;
pub mod rotation;
pub mod signal;

pub use clock::{FrameClock, FrameTime};
pub use damping::{damp, DEFAULT_LAMBDA};
pub use engine::{MotionEngine, MotionParameters};
pub use float::{FloatMotion, FloatOffset};
pub use path::{secondary_offsets, CatmullRomCurve, WaypointPath};
pub use pose::Pose;
pub use rotation::compose_rotation;
pub use signal::ScrollSignal;
