//! Elapsed/delta bookkeeping for hosts that only hand out timestamps.

/// Time values passed to `MotionEngine::advance` for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds since the first frame.
    pub elapsed: f64,
}

/// Tracks elapsed time from the first tick.
///
/// Timestamps only contribute the gap since the previous timestamp, so fixed
/// steps and timestamps can be mixed freely.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at absolute timestamp `now` (seconds).
    ///
    /// The first tick yields `dt = 0` and leaves `elapsed` where it was. A
    /// timestamp that does not move forward yields `dt = 0`.
    pub fn tick_at(&mut self, now: f64) -> FrameTime {
        if !now.is_finite() {
            return self.hold();
        }
        let prev = match self.last {
            Some(prev) if now > prev => prev,
            Some(_) => return self.hold(),
            None => {
                self.last = Some(now);
                return self.hold();
            }
        };

        self.last = Some(now);
        let dt = now - prev;
        self.elapsed += dt;
        FrameTime {
            dt: dt as f32,
            elapsed: self.elapsed,
        }
    }

    /// Advances by a fixed step, for explicit loops and tests.
    pub fn advance_by(&mut self, dt: f32) -> FrameTime {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt as f64;
        FrameTime {
            dt,
            elapsed: self.elapsed,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn hold(&self) -> FrameTime {
        FrameTime {
            dt: 0.0,
            elapsed: self.elapsed,
        }
    }
}
