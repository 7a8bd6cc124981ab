//! Timed slide advance.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId, TimerSpec};

/// Where the next autoplay tick goes from `current_slide`, as `(index,
/// swipe_count)`. After the last slide it wraps to the first with a zero
/// swipe count so the jump back is not animated.
pub fn next_autoplay_target(current_slide: usize, size: usize) -> (usize, usize) {
    if current_slide + 1 < size {
        (current_slide + 1, 1)
    } else {
        (0, 0)
    }
}

/// Repeating autoplay task on a `Scheduler`. Pausing cancels the task;
/// resuming re-arms it with a full interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval: Option<Duration>,
    enabled: bool,
    task: Option<TimerId>,
}

impl Autoplay {
    /// `None` leaves autoplay permanently inert.
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            enabled: false,
            task: None,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Whether a tick is currently armed.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Whether autoplay was started and not stopped; it may still be
    /// paused.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn owns(&self, id: TimerId) -> bool {
        self.task == Some(id)
    }

    pub fn start<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if self.interval.is_none() {
            return;
        }
        self.enabled = true;
        self.arm(scheduler);
    }

    pub fn pause<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if let Some(task) = self.task.take() {
            scheduler.cancel(task);
            tracing::trace!(%task, "autoplay paused");
        }
    }

    pub fn resume<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if self.enabled {
            self.arm(scheduler);
        }
    }

    pub fn stop<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        self.pause(scheduler);
        self.enabled = false;
    }

    fn arm<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if self.task.is_some() {
            return;
        }
        if let Some(interval) = self.interval {
            let task = scheduler.schedule(TimerSpec::Every(interval));
            tracing::trace!(%task, ?interval, "autoplay armed");
            self.task = Some(task);
        }
    }
}
