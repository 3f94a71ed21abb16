//! Idle floating motion applied to the group that holds the object.
//!
//! This is a parent transform layered by the host; it never feeds back into
//! the engine's `Pose`.

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

/// Parameters of the idle float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Phase offset in seconds, so several floating objects do not move in lockstep.
    pub offset: f64,
}

/// Group-level transform produced by [`FloatMotion::sample`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FloatOffset {
    pub position_y: f32,
    pub rotation: Vec3,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.2,
            float_intensity: 0.5,
            offset: 0.0,
        }
    }
}

impl FloatMotion {
    /// Default float with a random phase in `[0, 10000)` seconds.
    pub fn with_random_offset() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            offset: rng.gen_range(0.0..10_000.0),
            ..Self::default()
        }
    }

    pub fn sample(&self, elapsed: f64) -> FloatOffset {
        let phase = ((self.offset + elapsed) / 4.0 * self.speed as f64) as f32;
        let (sin, cos) = phase.sin_cos();
        FloatOffset {
            position_y: sin / 10.0 * self.float_intensity,
            rotation: Vec3::new(
                cos / 8.0 * self.rotation_intensity,
                sin / 8.0 * self.rotation_intensity,
                sin / 20.0 * self.rotation_intensity,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_level_with_a_cosine_tilt() {
        let offset = FloatMotion::default().sample(0.0);
        assert_eq!(offset.position_y, 0.0);
        assert!((offset.rotation.x - 0.2 / 8.0).abs() < 1e-7);
        assert_eq!(offset.rotation.y, 0.0);
    }

    #[test]
    fn stays_within_amplitude() {
        let motion = FloatMotion::with_random_offset();
        for i in 0..500 {
            let offset = motion.sample(i as f64 * 0.1);
            assert!(offset.position_y.abs() <= 0.05 + 1e-6);
            assert!(offset.rotation.abs().max_element() <= 0.025 + 1e-6);
        }
    }

    #[test]
    fn zero_intensity_is_still() {
        let motion = FloatMotion {
            rotation_intensity: 0.0,
            float_intensity: 0.0,
            ..FloatMotion::default()
        };
        assert_eq!(motion.sample(12.3), FloatOffset::default());
    }
}
