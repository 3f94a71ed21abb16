use crate::script::ScrollScript;
use anyhow::{bail, Result};
use prism_core::{FrameOutput, PresentationShell};

/// Fixed-rate frame loop settings.
#[derive(Clone, Copy, Debug)]
pub struct Simulation {
    pub fps: f32,
    pub duration: f64,
    /// Emit every n-th frame.
    pub every: usize,
}

/// Upper bound on frames in one run.
pub const MAX_FRAMES: usize = 10_000_000;

impl Simulation {
    /// Number of frames including the one at `t = 0`.
    pub fn frame_count(&self) -> Result<usize> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            bail!("fps must be a positive number, got {}", self.fps);
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            bail!("duration must be a non-negative number, got {}", self.duration);
        }
        let steps = (self.duration * self.fps as f64).round();
        if !steps.is_finite() || steps >= MAX_FRAMES as f64 {
            bail!(
                "{}s at {} fps exceeds the limit of {} frames",
                self.duration,
                self.fps,
                MAX_FRAMES
            );
        }
        Ok(steps as usize + 1)
    }
}

/// Runs the shell at a fixed rate, feeding scroll from `script`.
///
/// The first frame has `dt = 0`. Returns the number of frames emitted.
pub fn run(
    shell: &mut PresentationShell,
    sim: &Simulation,
    script: &ScrollScript,
    mut emit: impl FnMut(&FrameOutput) -> Result<()>,
) -> Result<usize> {
    let frames = sim.frame_count()?;
    let every = sim.every.max(1);
    let dt = 1.0 / sim.fps;

    let mut emitted = 0;
    for i in 0..frames {
        let t = i as f64 / sim.fps as f64;
        shell.set_scroll(script.value_at(t));
        let frame = shell.step(if i == 0 { 0.0 } else { dt });
        if i % every == 0 {
            emit(&frame)?;
            emitted += 1;
        }
    }
    Ok(emitted)
}
