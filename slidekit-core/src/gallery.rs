//! The carousel engine.
//!
//! `Gallery` owns the position state and routes every navigation trigger
//! (buttons, dots, swipes, autoplay) through `commit_slide`, so offset,
//! transition, navigation flags and the active dot are always pushed to
//! the surface together.

use std::time::Duration;

use slidekit_model::{DotId, GallerySettings, GallerySnapshot, NavControl};
use tracing::{debug, trace};

use crate::autoplay::{Autoplay, next_autoplay_target};
use crate::debounce::Debouncer;
use crate::dots::DotMap;
use crate::drag::DragSession;
use crate::error::{GalleryError, Result};
use crate::layout::compute_layout;
use crate::navigation::NavState;
use crate::position::GalleryState;
use crate::scheduler::{ManualScheduler, Scheduler, TimerId};
use crate::subscriptions::{Listener, Subscriptions};
use crate::surface::Surface;
use crate::transition::{OffsetTween, TransitionAnimator};

/// Input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerCancel,
    ClickLeft,
    ClickRight,
    ClickDot(DotId),
    Resize,
    /// A timer armed on the gallery's scheduler fired.
    Timer(TimerId),
}

impl GalleryEvent {
    /// Listener that has to be live for the event to be delivered. Timers
    /// belong to the engine and need none.
    pub fn listener(&self) -> Option<Listener> {
        match self {
            GalleryEvent::PointerDown { .. } => Some(Listener::PointerDown),
            GalleryEvent::PointerMove { .. } => Some(Listener::PointerMove),
            GalleryEvent::PointerUp => Some(Listener::PointerUp),
            GalleryEvent::PointerCancel => Some(Listener::PointerCancel),
            GalleryEvent::ClickLeft => Some(Listener::ClickLeft),
            GalleryEvent::ClickRight => Some(Listener::ClickRight),
            GalleryEvent::ClickDot(_) => Some(Listener::ClickDots),
            GalleryEvent::Resize => Some(Listener::Resize),
            GalleryEvent::Timer(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Live,
    TornDown,
}

#[derive(Debug)]
pub struct Gallery<S: Surface, C: Scheduler> {
    surface: S,
    scheduler: C,
    settings: GallerySettings,
    state: GalleryState,
    animator: TransitionAnimator,
    nav: NavState,
    drag: Option<DragSession>,
    autoplay: Autoplay,
    resize: Debouncer,
    subscriptions: Subscriptions,
    dots: DotMap,
    tween: Option<OffsetTween>,
    lifecycle: Lifecycle,
}

impl<S: Surface, C: Scheduler> Gallery<S, C> {
    /// Bind a gallery to its host. Nothing is presented or subscribed until
    /// `initialize`.
    pub fn new(
        surface: S,
        scheduler: C,
        settings: GallerySettings,
    ) -> Result<Self> {
        let settings = settings.sanitized();
        let size = surface.slide_count();
        if size == 0 {
            return Err(GalleryError::NoSlides);
        }

        Ok(Self {
            state: GalleryState::new(size),
            animator: TransitionAnimator::new(settings.speed),
            nav: NavState::derive(0, size),
            drag: None,
            autoplay: Autoplay::new(settings.autoplay_interval()),
            resize: Debouncer::new(settings.resize_debounce),
            subscriptions: Subscriptions::new(),
            dots: DotMap::empty(),
            tween: None,
            lifecycle: Lifecycle::Constructed,
            surface,
            scheduler,
            settings,
        })
    }

    /// Build the structure, lay out the track, attach listeners and start
    /// autoplay when enabled.
    pub fn initialize(&mut self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Constructed => {}
            Lifecycle::Live => return Err(GalleryError::AlreadyInitialized),
            Lifecycle::TornDown => return Err(GalleryError::TornDown),
        }

        let ids = self.surface.mount(self.settings.dots);
        self.dots = if self.settings.dots {
            DotMap::from_ids(ids, self.state.size())?
        } else {
            DotMap::empty()
        };

        self.relayout();
        if let Some(dot) = self.dots.id_at(self.state.current_slide()) {
            self.surface.set_dot_active(dot, true);
        }

        for listener in Listener::lifetime_set(!self.dots.is_empty()) {
            self.subscriptions.register(&mut self.surface, listener);
        }
        self.autoplay.start(&mut self.scheduler);
        self.lifecycle = Lifecycle::Live;

        debug!(
            size = self.state.size(),
            width = self.state.width(),
            dots = self.dots.len(),
            autoplay = ?self.autoplay.interval(),
            "gallery initialized"
        );
        Ok(())
    }

    /// Detach every listener and disarm every timer. Safe to call at any
    /// point, including mid-drag, and more than once.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }

        if self.drag.take().is_some() {
            let x = self.state.settle();
            self.surface.set_dragging(false);
            self.surface.set_offset(x);
        }
        let released = self.subscriptions.drain_into(&mut self.surface);
        self.autoplay.stop(&mut self.scheduler);
        self.resize.cancel(&mut self.scheduler);
        self.tween = None;
        self.lifecycle = Lifecycle::TornDown;

        debug!(released, "gallery torn down");
    }

    /// Deliver one host event. Events without a live listener, or arriving
    /// before `initialize` / after `teardown`, are dropped.
    pub fn handle(&mut self, event: GalleryEvent) {
        if self.lifecycle != Lifecycle::Live {
            trace!(?event, lifecycle = ?self.lifecycle, "event dropped");
            return;
        }
        if let Some(listener) = event.listener()
            && !self.subscriptions.is_active(listener)
        {
            trace!(?event, "no live listener for event");
            return;
        }

        match event {
            GalleryEvent::PointerDown { x } => self.begin_drag(x),
            GalleryEvent::PointerMove { x } => self.drag_to(x),
            GalleryEvent::PointerUp | GalleryEvent::PointerCancel => {
                self.end_drag()
            }
            GalleryEvent::ClickLeft => {
                self.click_left();
            }
            GalleryEvent::ClickRight => {
                self.click_right();
            }
            GalleryEvent::ClickDot(id) => match self.dots.index_of(id) {
                Some(index) => {
                    self.click_dot(index);
                }
                None => trace!(%id, "click outside any dot"),
            },
            GalleryEvent::Resize => {
                self.resize.arm(&mut self.scheduler);
            }
            GalleryEvent::Timer(id) => self.on_timer(id),
        }
    }

    /// Step back one slide. No-op on the first slide.
    pub fn click_left(&mut self) -> bool {
        let current = self.state.current_slide();
        if current == 0 {
            return false;
        }
        self.commit_slide(current - 1, 1)
    }

    /// Step forward one slide. No-op on the last slide.
    pub fn click_right(&mut self) -> bool {
        let current = self.state.current_slide();
        if current >= self.state.last_index() {
            return false;
        }
        self.commit_slide(current + 1, 1)
    }

    /// Jump to `index`; the transition lasts one step per slide skipped.
    pub fn click_dot(&mut self, index: usize) -> bool {
        let current = self.state.current_slide();
        if index == current || !self.state.is_valid_index(index) {
            return false;
        }
        self.commit_slide(index, current.abs_diff(index))
    }

    /// Advance as one autoplay tick would, wrapping after the last slide.
    pub fn autoplay_tick(&mut self) -> bool {
        let (index, swipe_count) =
            next_autoplay_target(self.state.current_slide(), self.state.size());
        self.commit_slide(index, swipe_count)
    }

    /// Make `index` the front slide and present it. Returns `false` without
    /// touching anything when the gallery is not live or `index` is out of
    /// range.
    pub fn commit_slide(&mut self, index: usize, swipe_count: usize) -> bool {
        if self.lifecycle != Lifecycle::Live {
            trace!(index, "commit on inactive gallery dropped");
            return false;
        }
        let from = self.rendered_offset();
        let Some(change) = self.state.commit(index) else {
            debug!(index, size = self.state.size(), "commit out of range");
            return false;
        };

        let duration = self.animator.animate(swipe_count);
        self.tween = (!duration.is_zero()).then(|| {
            OffsetTween::new(
                from,
                change.offset,
                self.scheduler.now(),
                duration,
            )
        });
        self.surface.set_transition(duration);
        self.surface.set_offset(change.offset);
        self.refresh_nav();

        // The previous dot is cleared even when it is the current one.
        if let Some(prev) = self.dots.id_at(change.prev) {
            self.surface.set_dot_active(prev, false);
        }
        if let Some(current) = self.dots.id_at(change.current) {
            self.surface.set_dot_active(current, true);
        }

        debug!(
            prev = change.prev,
            current = change.current,
            offset = change.offset,
            transition = ?duration,
            "slide committed"
        );
        true
    }

    fn begin_drag(&mut self, pointer_x: f32) {
        let x = self.state.x();
        if self.drag.is_some() {
            trace!(pointer_x, "pointer down during drag restarts session");
        }
        self.drag = Some(DragSession::begin(pointer_x, x));
        self.tween = None;
        self.surface.set_transition(self.animator.snap());
        self.surface.set_dragging(true);
        self.subscriptions
            .register(&mut self.surface, Listener::PointerMove);
        self.autoplay.pause(&mut self.scheduler);
        debug!(pointer_x, offset = x, "drag started");
    }

    fn drag_to(&mut self, pointer_x: f32) {
        let maximum_x = self.state.maximum_x();
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let x = session.update(pointer_x, maximum_x);
        self.state.set_drag_offset(x);
        self.surface.set_offset(x);
        trace!(pointer_x, shift = session.drag_shift(), offset = x, "drag");
    }

    fn end_drag(&mut self) {
        let Some(mut session) = self.drag.take() else {
            return;
        };
        let current = self.state.current_slide();
        let target = session
            .resolve(current, self.state.size(), self.settings.sensitivity)
            .map_or(current, |direction| direction.apply(current));

        self.surface.set_dragging(false);
        self.commit_slide(target, 1);
        self.subscriptions
            .release(&mut self.surface, Listener::PointerMove);
        self.autoplay.resume(&mut self.scheduler);

        debug!(
            shift = session.drag_shift(),
            from = current,
            to = target,
            "drag ended"
        );
    }

    fn on_timer(&mut self, id: TimerId) {
        if self.autoplay.owns(id) {
            self.autoplay_tick();
        } else if self.resize.fire(id) {
            self.relayout();
        } else {
            trace!(%id, "stale timer ignored");
        }
    }

    /// Re-measure the host and snap the track onto the current slide.
    fn relayout(&mut self) {
        let layout = compute_layout(
            self.surface.measure_width(),
            self.state.size(),
            self.settings.margin,
        );
        let x = self.state.apply_layout(layout);
        if let Some(session) = self.drag.as_mut() {
            session.rebase(x);
        }
        self.tween = None;

        self.surface.set_transition(self.animator.snap());
        self.surface.set_track_layout(layout);
        self.surface.set_offset(x);
        self.refresh_nav();

        debug!(
            width = layout.width,
            maximum_x = layout.maximum_x,
            offset = x,
            "layout recomputed"
        );
    }

    fn refresh_nav(&mut self) {
        self.nav =
            NavState::derive(self.state.current_slide(), self.state.size());
        for control in NavControl::ALL {
            self.surface
                .set_nav_disabled(control, self.nav.is_disabled(control));
        }
    }

    /// Offset currently visible, following the committed transition over
    /// scheduler time.
    pub fn rendered_offset(&self) -> f32 {
        match self.tween {
            Some(tween) => tween.sample(self.scheduler.now()),
            None => self.state.x(),
        }
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            size: self.state.size(),
            current_slide: self.state.current_slide(),
            prev_slide: self.state.prev_slide(),
            width: self.state.width(),
            offset: self.state.x(),
            maximum_offset: self.state.maximum_x(),
            transition: self.animator.current(),
            left_disabled: self.nav.left_disabled,
            right_disabled: self.nav.right_disabled,
            active_dot: (!self.dots.is_empty()).then_some(self.nav.active_dot),
            dragging: self.drag.is_some(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// Transition duration last pushed to the track.
    pub fn transition(&self) -> Duration {
        self.animator.current()
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn dots(&self) -> &DotMap {
        &self.dots
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_live(&self) -> bool {
        self.lifecycle == Lifecycle::Live
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }
}

impl<S: Surface> Gallery<S, ManualScheduler> {
    /// Move virtual time forward by `by`, delivering every timer that falls
    /// due on the way. Returns how many fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.scheduler.now() + by;
        self.advance_to(until)
    }

    pub fn advance_to(&mut self, until: Duration) -> usize {
        let mut fired = 0;
        while let Some(id) = self.scheduler.next_due(until) {
            self.handle(GalleryEvent::Timer(id));
            fired += 1;
        }
        self.scheduler.advance_to(until);
        fired
    }
}

impl<S: Surface, C: Scheduler> Drop for Gallery<S, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
