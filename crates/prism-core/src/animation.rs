use crate::color::Rgb;
use keyframe::{AnimationSequence, CanTween, EasingFunction, Keyframe};
use std::fmt;

/// Length of the background color fade after a config change.
pub const BACKGROUND_FADE_SECONDS: f64 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingFunction for EasingType {
    fn y(&self, x: f64) -> f64 {
        match self {
            EasingType::Linear => keyframe::functions::Linear.y(x),
            EasingType::EaseIn => keyframe::functions::EaseIn.y(x),
            EasingType::EaseOut => keyframe::functions::EaseOut.y(x),
            EasingType::EaseInOut => keyframe::functions::EaseInOut.y(x),
        }
    }
}

impl CanTween for Rgb {
    fn ease(from: Self, to: Self, time: impl keyframe::num_traits::Float) -> Self {
        let t = time.to_f32().unwrap_or(1.0);
        Rgb {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
        }
    }
}

/// A value that eases from wherever it currently is toward a new target.
///
/// Retargeting mid-flight starts the new segment from the current
/// interpolated value, so rapid changes never jump.
#[derive(Clone)]
pub struct Animated<T>
where
    T: Clone + CanTween + Default,
{
    sequence: AnimationSequence<T>,
    start_time: f64,
    current: T,
    target: T,
}

impl<T> Animated<T>
where
    T: Clone + CanTween + Default,
{
    pub fn new(initial: T) -> Self {
        Self {
            sequence: AnimationSequence::from(vec![Keyframe::new(
                initial.clone(),
                0.0,
                EasingType::Linear,
            )]),
            start_time: 0.0,
            current: initial.clone(),
            target: initial,
        }
    }

    /// Starts a segment from the current value at `now` to `target`.
    /// A non-positive duration jumps straight to the target.
    pub fn retarget(&mut self, target: T, now: f64, duration: f64, easing: EasingType) {
        self.update(now);
        if !(duration > 0.0) {
            *self = Self::new(target);
            self.start_time = now;
            return;
        }

        let frames = vec![
            Keyframe::new(self.current.clone(), 0.0, easing),
            Keyframe::new(target.clone(), duration, easing),
        ];
        self.sequence = AnimationSequence::from(frames);
        self.start_time = now;
        self.target = target;
    }

    /// Samples the animation at absolute time `now`.
    pub fn update(&mut self, now: f64) -> T {
        let local = (now - self.start_time).max(0.0);
        self.sequence.advance_to(local);
        self.current = self.sequence.now();
        self.current.clone()
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn is_settled(&self, now: f64) -> bool {
        now - self.start_time >= self.sequence.duration()
    }
}

impl<T> fmt::Debug for Animated<T>
where
    T: Clone + CanTween + Default + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animated")
            .field("current", &self.current)
            .field("target", &self.target)
            .finish()
    }
}
