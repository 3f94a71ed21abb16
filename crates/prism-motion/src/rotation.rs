//! Rotation composed from absolute time and scroll progress.
//!
//! Every axis is recomputed from scratch each frame; nothing here reads a
//! previous rotation.

use glam::Vec3;
use std::f64::consts::PI;

/// Fraction of the spin speed applied to the X tumble.
pub const TUMBLE_FACTOR: f64 = 0.2;
/// One full scroll traversal maps to two full turns around Y.
pub const SCROLL_SPIN: f64 = PI * 4.0;
/// Lean applied per unit of approach velocity around Z.
pub const TILT_FACTOR: f32 = 0.5;

/// Builds the Euler rotation (XYZ) for one frame.
///
/// - x: `elapsed * speed * 0.2`
/// - y: `elapsed * speed + progress * 4π`
/// - z: `-velocity * 0.5`
pub fn compose_rotation(elapsed: f64, rotation_speed: f32, progress: f32, velocity: f32) -> Vec3 {
    let base = elapsed * rotation_speed as f64;
    let x = base * TUMBLE_FACTOR;
    let y = base + progress as f64 * SCROLL_SPIN;
    let z = -velocity * TILT_FACTOR;
    Vec3::new(x as f32, y as f32, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scroll_is_two_turns() {
        let start = compose_rotation(0.0, 0.0, 0.0, 0.0);
        let end = compose_rotation(0.0, 0.0, 1.0, 0.0);
        let turns = (end.y - start.y) / std::f32::consts::TAU;
        assert!((turns - 2.0).abs() < 1e-6);
    }

    #[test]
    fn tumble_is_a_fifth_of_spin() {
        let r = compose_rotation(10.0, 0.5, 0.0, 0.0);
        assert!((r.y - 5.0).abs() < 1e-6);
        assert!((r.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tilt_leans_against_velocity_and_vanishes_when_idle() {
        assert!((compose_rotation(0.0, 1.0, 0.2, 0.4).z + 0.2).abs() < 1e-6);
        assert_eq!(compose_rotation(3.0, 1.0, 0.2, 0.0).z, 0.0);
    }

    #[test]
    fn same_inputs_same_rotation() {
        let a = compose_rotation(123.4, 1.7, 0.33, 0.01);
        let b = compose_rotation(123.4, 1.7, 0.33, 0.01);
        assert_eq!(a, b);
    }
}
