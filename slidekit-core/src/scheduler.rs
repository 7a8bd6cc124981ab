//! Timer abstraction the engine schedules autoplay and resize work on.
//!
//! The engine never reads a wall clock. Hosts wire `Scheduler` to whatever
//! event loop they run and feed fired timers back through
//! `GalleryEvent::Timer`. `ManualScheduler` is the virtual-time
//! implementation used by tests and the simulator.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Repeating timers never fire more often than this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// What kind of timer to arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSpec {
    /// Fire once after the delay.
    Once(Duration),
    /// Fire every period until cancelled.
    Every(Duration),
}

/// Clock and timer source injected into the engine.
pub trait Scheduler {
    /// Time elapsed since the scheduler's epoch.
    fn now(&self) -> Duration;

    /// Arm a timer and return its handle.
    fn schedule(&mut self, spec: TimerSpec) -> TimerId;

    /// Disarm a timer. Returns `false` when the handle was unknown or had
    /// already fired for the last time.
    fn cancel(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    id: TimerId,
    period: Option<Duration>,
}

/// Deterministic scheduler driven by explicit time advancement.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    // Keyed by (deadline, arming order) so ties fire in scheduling order.
    queue: BTreeMap<(Duration, u64), Armed>,
    keys: HashMap<TimerId, (Duration, u64)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Repeating timers are re-armed one period later.
    pub fn next_due(&mut self, until: Duration) -> Option<TimerId> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        let armed = self.queue.remove(&key)?;
        self.keys.remove(&armed.id);
        self.now = self.now.max(key.0);

        if let Some(period) = armed.period {
            self.insert(armed.id, key.0 + period, Some(period));
        }
        Some(armed.id)
    }

    /// Move the clock forward without firing anything. Time never goes
    /// backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn insert(&mut self, id: TimerId, deadline: Duration, period: Option<Duration>) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, Armed { id, period });
        self.keys.insert(id, key);
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, spec: TimerSpec) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        match spec {
            TimerSpec::Once(delay) => self.insert(id, self.now + delay, None),
            TimerSpec::Every(period) => {
                let period = period.max(MIN_PERIOD);
                self.insert(id, self.now + period, Some(period));
            }
        }
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }
}
