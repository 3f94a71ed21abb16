//! # Waypoint Path
//!
//! Open Catmull-Rom curve through a fixed set of anchors, plus the secondary
//! wave and arc offsets layered on top of it.
//!
//! The curve uses uniform parametrization: with `n` points, segment `i` spans
//! `t ∈ [i / (n-1), (i+1) / (n-1)]`, so every anchor is hit exactly at its
//! segment boundary. Missing neighbours at the open ends are reflected
//! (`2·p₀ − p₁` and `2·pₙ − pₙ₋₁`).

use glam::Vec3;
use std::f32::consts::PI;

/// Default tangent scale. `0.5` gives the classic Catmull-Rom shape.
pub const DEFAULT_TENSION: f32 = 0.5;

/// Amplitude of the vertical bob added to Y.
pub const WAVE_AMPLITUDE: f32 = 0.3;
/// Depth of the single arc used as Z.
pub const ARC_DEPTH: f32 = 1.5;

/// An open Catmull-Rom curve through `points`.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    tension: f32,
}

impl CatmullRomCurve {
    /// Creates a curve. Returns `None` with fewer than two points.
    pub fn new(points: Vec<Vec3>, tension: f32) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points, tension })
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`. NaN maps to the start.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.points.len();
        let scaled = (n - 1) as f32 * t;

        let mut index = scaled.floor() as usize;
        let mut weight = scaled - index as f32;
        if index >= n - 1 {
            index = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if index + 2 < n {
            self.points[index + 2]
        } else {
            p2 * 2.0 - p1
        };

        let tangent_in = (p2 - p0) * self.tension;
        let tangent_out = (p3 - p1) * self.tension;
        hermite(p1, p2, tangent_in, tangent_out, weight)
    }

    /// Samples `count` evenly spaced points, both ends included.
    pub fn sample(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..count)
                .map(|i| self.point_at(i as f32 / (count - 1) as f32))
                .collect(),
        }
    }
}

/// Cubic Hermite segment between `a` and `b` with end tangents `ta` and `tb`.
fn hermite(a: Vec3, b: Vec3, ta: Vec3, tb: Vec3, t: f32) -> Vec3 {
    let c0 = a;
    let c1 = ta;
    let c2 = -3.0 * a + 3.0 * b - 2.0 * ta - tb;
    let c3 = 2.0 * a - 2.0 * b + ta + tb;
    let t2 = t * t;
    let t3 = t2 * t;
    c0 + c1 * t + c2 * t2 + c3 * t3
}

/// The three narrative anchors: object on the right, then the left, then centered.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointPath {
    curve: CatmullRomCurve,
}

impl WaypointPath {
    pub const RIGHT: Vec3 = Vec3::new(2.5, -0.5, 0.0);
    pub const LEFT: Vec3 = Vec3::new(-2.5, -0.5, 0.0);
    pub const CENTER: Vec3 = Vec3::new(0.0, -0.5, 0.0);

    pub fn new(right: Vec3, left: Vec3, center: Vec3, tension: f32) -> Self {
        Self {
            curve: CatmullRomCurve {
                points: vec![right, left, center],
                tension,
            },
        }
    }

    pub fn right(&self) -> Vec3 {
        self.curve.points[0]
    }

    pub fn left(&self) -> Vec3 {
        self.curve.points[1]
    }

    pub fn center(&self) -> Vec3 {
        self.curve.points[2]
    }

    pub fn curve(&self) -> &CatmullRomCurve {
        &self.curve
    }

    /// Spline point at `progress`, before secondary offsets.
    pub fn point_at(&self, progress: f32) -> Vec3 {
        self.curve.point_at(progress)
    }

    /// Final object position: spline X, spline Y plus wave, arc as Z.
    pub fn position_at(&self, progress: f32) -> Vec3 {
        let point = self.point_at(progress);
        let (wave, arc) = secondary_offsets(progress);
        Vec3::new(point.x, point.y + wave, arc)
    }
}

impl Default for WaypointPath {
    fn default() -> Self {
        Self::new(Self::RIGHT, Self::LEFT, Self::CENTER, DEFAULT_TENSION)
    }
}

/// Returns `(wave, arc)` for a progress value.
///
/// The wave completes two oscillations across the scroll range; the arc rises
/// once and peaks at the midpoint.
pub fn secondary_offsets(progress: f32) -> (f32, f32) {
    if !progress.is_finite() {
        return (0.0, 0.0);
    }
    let wave = (progress * PI * 4.0).sin() * WAVE_AMPLITUDE;
    let arc = (progress * PI).sin() * ARC_DEPTH;
    (wave, arc)
}
