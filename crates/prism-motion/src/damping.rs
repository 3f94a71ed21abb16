//! Exponential damping toward a moving target.

/// Rate constant tuned for a heavy, inertial feel. Lower is slower.
pub const DEFAULT_LAMBDA: f32 = 1.5;

/// Moves `current` toward `target` by exponential decay over `dt` seconds.
///
/// `s' = target + (s - target) * exp(-lambda * dt)`
///
/// Two steps of `dt / 2` land on the same value as one step of `dt`, so the
/// trajectory does not depend on the frame rate. A zero, negative or
/// non-finite `dt` leaves `current` untouched.
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    if !(dt > 0.0) || !dt.is_finite() {
        return current;
    }
    target + (current - target) * (-lambda * dt).exp()
}

/// Result of one smoothing step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampStep {
    pub value: f32,
    /// Remaining distance to the target after the step (`target - value`).
    pub velocity: f32,
}

/// Runs [`damp`] and reports the remaining approach rate alongside the new value.
pub fn damp_step(current: f32, target: f32, lambda: f32, dt: f32) -> DampStep {
    let value = damp(current, target, lambda, dt);
    DampStep {
        value,
        velocity: target - value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_is_identity() {
        assert_eq!(damp(0.3, 1.0, DEFAULT_LAMBDA, 0.0), 0.3);
        assert_eq!(damp(0.3, 1.0, DEFAULT_LAMBDA, -0.016), 0.3);
        assert_eq!(damp(0.3, 1.0, DEFAULT_LAMBDA, f32::NAN), 0.3);
    }

    #[test]
    fn converges_strictly_without_overshoot() {
        let cases = [(0.0, 1.0), (1.0, 0.0), (0.25, 0.75), (0.9, 0.1)];
        for (start, target) in cases {
            for dt in [0.001_f32, 0.016, 0.1, 0.5] {
                let next = damp(start, target, DEFAULT_LAMBDA, dt);
                assert!(
                    (next - target).abs() < (start - target).abs(),
                    "no progress from {start} to {target} with dt {dt}"
                );
                let lo = start.min(target);
                let hi = start.max(target);
                assert!(next >= lo && next <= hi, "overshoot: {next}");
            }
        }
    }

    #[test]
    fn frame_rate_independent() {
        let h = 1.0 / 30.0;
        let once = damp(0.0, 1.0, DEFAULT_LAMBDA, h);
        let half = damp(0.0, 1.0, DEFAULT_LAMBDA, h / 2.0);
        let twice = damp(half, 1.0, DEFAULT_LAMBDA, h / 2.0);
        assert!((once - twice).abs() < 1e-6, "{once} vs {twice}");
    }

    #[test]
    fn doubling_dt_does_not_double_the_step() {
        let h = 0.2;
        let single = damp(0.0, 1.0, DEFAULT_LAMBDA, h);
        let double = damp(0.0, 1.0, DEFAULT_LAMBDA, 2.0 * h);
        assert!(double < 2.0 * single);
    }

    #[test]
    fn velocity_is_remaining_distance() {
        let step = damp_step(0.0, 1.0, DEFAULT_LAMBDA, 0.1);
        assert!((step.velocity - (1.0 - step.value)).abs() < f32::EPSILON);

        let settled = damp_step(0.5, 0.5, DEFAULT_LAMBDA, 0.1);
        assert_eq!(settled.velocity, 0.0);
    }
}
