//! Headless replay of input scripts on virtual time.

use std::time::Duration;

use serde::Serialize;
use slidekit_core::{
    Gallery, GalleryError, GalleryEvent, GallerySettings, GallerySnapshot,
    HeadlessSurface, ManualScheduler, Scheduler,
};
use tracing::warn;

use crate::script::{ScriptEvent, ScriptStep};

/// Engine state after one replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub at_ms: u64,
    /// `None` for the initial state and for trailing settle time.
    pub event: Option<ScriptEvent>,
    /// Timers (autoplay ticks, resize debounces) that fired before the event.
    pub timers_fired: usize,
    pub snapshot: GallerySnapshot,
}

impl StepReport {
    pub fn to_text(&self) -> String {
        let event = self
            .event
            .map_or_else(|| "-".to_string(), |event| event.to_string());
        let timers = if self.timers_fired > 0 {
            format!(" (+{} timer)", self.timers_fired)
        } else {
            String::new()
        };
        format!(
            "{:>7}ms  {:<20} {}{}",
            self.at_ms,
            event,
            self.snapshot.summary(),
            timers
        )
    }
}

/// What teardown left behind on the surface and scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeardownReport {
    pub live_subscriptions: usize,
    pub stale_unsubscribes: usize,
    pub pending_timers: usize,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.live_subscriptions == 0
            && self.stale_unsubscribes == 0
            && self.pending_timers == 0
    }
}

#[derive(Debug)]
pub struct Simulation {
    gallery: Gallery<HeadlessSurface, ManualScheduler>,
}

impl Simulation {
    /// Build and initialize a gallery over a headless host.
    pub fn new(
        slides: usize,
        width: f32,
        settings: GallerySettings,
    ) -> Result<Self, GalleryError> {
        let mut gallery = Gallery::new(
            HeadlessSurface::new(slides, width),
            ManualScheduler::new(),
            settings,
        )?;
        gallery.initialize()?;
        Ok(Self { gallery })
    }

    pub fn gallery(&self) -> &Gallery<HeadlessSurface, ManualScheduler> {
        &self.gallery
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.gallery.scheduler().now().as_millis())
            .unwrap_or(u64::MAX)
    }

    pub fn initial_report(&self) -> StepReport {
        StepReport {
            at_ms: self.now_ms(),
            event: None,
            timers_fired: 0,
            snapshot: self.gallery.snapshot(),
        }
    }

    /// Advance to the step's time, then deliver its event. Steps in the
    /// past are delivered at the current time.
    pub fn step(&mut self, step: &ScriptStep) -> StepReport {
        let timers_fired =
            self.gallery.advance_to(Duration::from_millis(step.at_ms));
        self.apply(step.event);
        StepReport {
            at_ms: self.now_ms(),
            event: Some(step.event),
            timers_fired,
            snapshot: self.gallery.snapshot(),
        }
    }

    pub fn run<'a, I>(&mut self, steps: I) -> Vec<StepReport>
    where
        I: IntoIterator<Item = &'a ScriptStep>,
    {
        steps.into_iter().map(|step| self.step(step)).collect()
    }

    /// Let `duration` of virtual time pass with no input.
    pub fn settle(&mut self, duration: Duration) -> StepReport {
        let timers_fired = self.gallery.advance(duration);
        StepReport {
            at_ms: self.now_ms(),
            event: None,
            timers_fired,
            snapshot: self.gallery.snapshot(),
        }
    }

    /// Tear the gallery down and report anything it failed to release.
    pub fn finish(mut self) -> TeardownReport {
        self.gallery.teardown();
        let surface = self.gallery.surface();
        TeardownReport {
            live_subscriptions: surface.live_subscriptions(),
            stale_unsubscribes: surface.stale_unsubscribes(),
            pending_timers: self.gallery.scheduler().pending(),
        }
    }

    fn apply(&mut self, event: ScriptEvent) {
        let event = match event {
            ScriptEvent::PointerDown { x } => GalleryEvent::PointerDown { x },
            ScriptEvent::PointerMove { x } => GalleryEvent::PointerMove { x },
            ScriptEvent::PointerUp => GalleryEvent::PointerUp,
            ScriptEvent::PointerCancel => GalleryEvent::PointerCancel,
            ScriptEvent::ClickLeft => GalleryEvent::ClickLeft,
            ScriptEvent::ClickRight => GalleryEvent::ClickRight,
            ScriptEvent::ClickDot { slide } => {
                match self.gallery.dots().id_at(slide) {
                    Some(id) => GalleryEvent::ClickDot(id),
                    None => {
                        warn!(slide, "script clicks a dot that does not exist");
                        return;
                    }
                }
            }
            ScriptEvent::Resize { width } => {
                self.gallery.surface_mut().set_width(width);
                GalleryEvent::Resize
            }
            ScriptEvent::Wait => return,
        };
        self.gallery.handle(event);
    }
}
