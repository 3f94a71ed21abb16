//! Scroll scripts for headless runs.
//!
//! A script is a comma-separated list of `time:fraction` steps, e.g.
//! `0:0,1:1,3:0.5`. The scroll fraction jumps to each value at its time and
//! holds until the next step, like a user flicking the wheel.

use anyhow::{bail, Context, Result};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollScript {
    steps: Vec<(f64, f32)>,
}

impl ScrollScript {
    /// Scroll fraction in effect at time `t`.
    pub fn value_at(&self, t: f64) -> f32 {
        self.steps
            .iter()
            .take_while(|(time, _)| *time <= t)
            .last()
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }
}

impl FromStr for ScrollScript {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut steps = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (time, value) = entry
                .split_once(':')
                .with_context(|| format!("scroll step '{}' is not time:fraction", entry))?;
            let time: f64 = time
                .trim()
                .parse()
                .with_context(|| format!("invalid time in '{}'", entry))?;
            let value: f32 = value
                .trim()
                .parse()
                .with_context(|| format!("invalid fraction in '{}'", entry))?;
            if !time.is_finite() || time < 0.0 {
                bail!("scroll step time must be a non-negative number: '{}'", entry);
            }
            steps.push((time, value));
        }
        if steps.is_empty() {
            bail!("scroll script is empty");
        }
        steps.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { steps })
    }
}
