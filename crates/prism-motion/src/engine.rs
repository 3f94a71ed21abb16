//! # Motion Engine
//!
//! Per-frame integration of damping, rotation and path composition.
//!
//! ## Frame Contract
//! The host calls [`MotionEngine::advance`] exactly once per displayed frame.
//! The only state carried between calls is the smoothed progress; everything
//! else is recomputed from the call arguments. The call is total: any finite
//! or non-finite input produces a pose, never a panic.

use crate::damping::{damp_step, DEFAULT_LAMBDA};
use crate::path::WaypointPath;
use crate::pose::Pose;
use crate::rotation::compose_rotation;
use crate::signal::ScrollSignal;
use tracing::trace;

/// Externally configured scalars that modulate the motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParameters {
    /// Self-rotation speed in radians per second. Expected `>= 0`.
    pub rotation_speed: f32,
    /// Uniform scale, applied as-is every frame. Expected `> 0`.
    pub scale: f32,
}

impl MotionParameters {
    pub fn new(rotation_speed: f32, scale: f32) -> Self {
        Self {
            rotation_speed,
            scale,
        }
    }
}

impl Default for MotionParameters {
    fn default() -> Self {
        Self::new(0.5, 1.5)
    }
}

/// Scroll-driven pose generator.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    lambda: f32,
    path: WaypointPath,
    smoothed: f32,
    velocity: f32,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionEngine {
    pub fn new() -> Self {
        Self::with_lambda(DEFAULT_LAMBDA)
    }

    /// Engine with a custom damping rate. Non-finite or negative rates fall back to the default.
    pub fn with_lambda(lambda: f32) -> Self {
        let lambda = if lambda.is_finite() && lambda >= 0.0 {
            lambda
        } else {
            DEFAULT_LAMBDA
        };
        Self {
            lambda,
            path: WaypointPath::default(),
            smoothed: 0.0,
            velocity: 0.0,
        }
    }

    pub fn with_path(mut self, path: WaypointPath) -> Self {
        self.path = path;
        self
    }

    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    /// Smoothed progress after the last `advance`.
    pub fn progress(&self) -> f32 {
        self.smoothed
    }

    /// Approach rate (`target - progress`) after the last `advance`.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Returns the engine to its initial state.
    pub fn reset(&mut self) {
        self.smoothed = 0.0;
        self.velocity = 0.0;
    }

    /// Computes the pose for one frame.
    ///
    /// - `dt`: seconds since the previous frame; `0` freezes the smoothing.
    /// - `elapsed`: seconds since the scene started; drives the time-based spin.
    /// - `scroll_fraction`: current scroll progress; clamped to `[0, 1]`.
    pub fn advance(
        &mut self,
        dt: f32,
        elapsed: f64,
        scroll_fraction: f32,
        params: &MotionParameters,
    ) -> Pose {
        let target = sanitize_fraction(scroll_fraction);
        let step = damp_step(self.smoothed, target, self.lambda, dt);
        if step.value.is_finite() {
            self.smoothed = step.value;
            self.velocity = step.velocity;
        }
        let p = self.smoothed;

        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        let speed = if params.rotation_speed.is_finite() {
            params.rotation_speed
        } else {
            0.0
        };

        let pose = Pose {
            position: self.path.position_at(p),
            rotation: compose_rotation(elapsed, speed, p, self.velocity),
            scale: params.scale,
        };
        trace!(progress = p, velocity = self.velocity, "motion frame");
        pose
    }

    /// Reads the shared signal once and advances.
    pub fn advance_from(
        &mut self,
        signal: &ScrollSignal,
        dt: f32,
        elapsed: f64,
        params: &MotionParameters,
    ) -> Pose {
        let fraction = signal.get();
        self.advance(dt, elapsed, fraction, params)
    }
}

fn sanitize_fraction(fraction: f32) -> f32 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
