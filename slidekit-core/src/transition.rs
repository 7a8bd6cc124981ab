//! Transition timing for committed moves and an optional offset tween for
//! hosts that render the animation themselves.

use std::time::Duration;

/// Duration of a move crossing `swipe_count` slide positions. Zero swipes
/// (autoplay wraparound) snap without animation.
pub fn transition_duration(speed: f32, swipe_count: usize) -> Duration {
    if swipe_count == 0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(speed * swipe_count as f32)
        .unwrap_or(Duration::ZERO)
}

/// Tracks the transition duration currently applied to the track.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionAnimator {
    speed: f32,
    current: Duration,
}

impl TransitionAnimator {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            current: Duration::ZERO,
        }
    }

    /// Seconds per single-slide move.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn is_snapping(&self) -> bool {
        self.current.is_zero()
    }

    pub fn animate(&mut self, swipe_count: usize) -> Duration {
        self.current = transition_duration(self.speed, swipe_count);
        self.current
    }

    /// Disable animation so the offset lands immediately.
    pub fn snap(&mut self) -> Duration {
        self.current = Duration::ZERO;
        self.current
    }
}

/// Quadratic ease-out over linear progress in `0..=1`.
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Interpolates the visible offset between two committed positions over
/// scheduler time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTween {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
}

impl OffsetTween {
    pub fn new(
        from: f32,
        to: f32,
        started_at: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }

    /// Offset at scheduler time `now`.
    pub fn sample(&self, now: Duration) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out(t)
    }
}
