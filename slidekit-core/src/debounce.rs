//! Coalesces bursts of resize notifications into one layout pass.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId, TimerSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    window: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restart the quiet window, dropping any previously armed timer.
    pub fn arm<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) -> TimerId {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule(TimerSpec::Once(self.window));
        self.pending = Some(id);
        id
    }

    /// Claim a fired timer. Returns `true` when it was this debouncer's and
    /// the deferred work should run now.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel<C: Scheduler + ?Sized>(&mut self, scheduler: &mut C) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }
}
