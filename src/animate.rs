//! Cooperative scroll animation.
//!
//! An animated scroll-to-row is a cancellable, restartable task stepped by
//! the host's render loop: the session calls [`ScrollAnimation::value_at`]
//! once per frame with a millisecond timestamp and applies the result to
//! the viewport. There is no thread — a new request supersedes an
//! in-flight one on the same single-writer session.

/// Default duration of an animated scroll, in milliseconds.
pub const SCROLL_ANIMATION_MS: f64 = 300.0;

/// Easing curve applied over the animation's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Slow start and end; the default for scroll transitions.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// One in-flight scroll transition along a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl ScrollAnimation {
    /// Start a transition from `from` to `to` at time `now_ms`.
    pub fn new(from: f32, to: f32, now_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms: SCROLL_ANIMATION_MS,
            easing: Easing::default(),
        }
    }

    /// Override the duration (milliseconds). Non-positive durations
    /// complete on the first frame.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Final scroll position this animation converges to.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Scroll position at `now_ms`. Clamps to the target once the duration
    /// has elapsed — repeated calls past the end stay at the target with no
    /// overshoot.
    pub fn value_at(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation)]
        let eased = self.easing.apply(t as f32);
        self.from + (self.to - self.from) * eased
    }

    /// True once the transition has reached its target.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// Redirect an in-flight animation to a new target, restarting from
    /// the current interpolated position. Requests for the target already
    /// in flight are no-ops, so repeated identical calls converge without
    /// restarting the clock.
    pub fn retarget(&mut self, to: f32, now_ms: f64) {
        if to.to_bits() == self.to.to_bits() {
            return;
        }
        *self = Self {
            from: self.value_at(now_ms),
            to,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
            easing: self.easing,
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_from_and_ends_at_target() {
        let anim = ScrollAnimation::new(0.0, 100.0, 1000.0);
        assert_eq!(anim.value_at(1000.0), 0.0);
        assert_eq!(anim.value_at(1000.0 + SCROLL_ANIMATION_MS), 100.0);
    }

    #[test]
    fn test_no_overshoot_past_the_end() {
        let anim = ScrollAnimation::new(0.0, 100.0, 0.0);
        assert_eq!(anim.value_at(10_000.0), 100.0);
        assert_eq!(anim.value_at(99_999.0), 100.0);
        assert!(anim.is_finished(10_000.0));
    }

    #[test]
    fn test_midpoint_of_ease_in_out_is_halfway() {
        let anim = ScrollAnimation::new(0.0, 100.0, 0.0).with_duration(200.0);
        assert_eq!(anim.value_at(100.0), 50.0);
    }

    #[test]
    fn test_linear_easing_is_proportional() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0u8..=20 {
            let t = f32::from(i) / 20.0;
            let v = Easing::EaseInOutCubic.apply(t);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_retarget_restarts_from_current_position() {
        let mut anim = ScrollAnimation::new(0.0, 100.0, 0.0).with_duration(200.0);
        anim.retarget(0.0, 100.0);
        // New animation starts at the halfway value.
        assert_eq!(anim.value_at(100.0), 50.0);
        assert_eq!(anim.target(), 0.0);
        assert_eq!(anim.value_at(300.0), 0.0);
    }

    #[test]
    fn test_retarget_to_same_target_does_not_restart() {
        let mut anim = ScrollAnimation::new(0.0, 100.0, 0.0).with_duration(200.0);
        let before = anim.clone();
        anim.retarget(100.0, 150.0);
        assert_eq!(anim, before);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let anim = ScrollAnimation::new(0.0, 100.0, 0.0).with_duration(0.0);
        assert_eq!(anim.value_at(0.0), 100.0);
        assert!(anim.is_finished(0.0));
    }
}
