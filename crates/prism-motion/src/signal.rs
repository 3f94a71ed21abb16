//! Shared scroll fraction written by input events and read by the frame loop.

use std::sync::atomic::{AtomicU32, Ordering};

/// Last-writer-wins scroll progress in `[0, 1]`.
///
/// Stored as raw `f32` bits in an atomic; reads never tear. Relaxed ordering,
/// a reader may see a value one frame old.
#[derive(Debug, Default)]
pub struct ScrollSignal {
    bits: AtomicU32,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(fraction: f32) -> Self {
        let signal = Self::new();
        signal.set(fraction);
        signal
    }

    /// Stores a new fraction, clamped to `[0, 1]`. NaN is stored as `0`.
    pub fn set(&self, fraction: f32) {
        let value = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Snapshot of the latest fraction.
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}
