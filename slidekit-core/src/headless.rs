//! In-memory `Surface` that records what the engine presents.
//!
//! Used by integration tests and the simulator. It also keeps the set of
//! live subscriptions so leaks and double releases can be asserted on.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use slidekit_model::{DotId, NavControl};

use crate::layout::Layout;
use crate::subscriptions::{Listener, SubscriptionId};
use crate::surface::Surface;

/// Dot ids handed out by `HeadlessSurface` start here, so tests never
/// confuse a dot id with a slide index.
pub const FIRST_DOT_ID: u64 = 100;

/// Presentation state as last written by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub layout: Option<Layout>,
    pub offset: f32,
    pub transition: Duration,
    pub left_disabled: bool,
    pub right_disabled: bool,
    pub active_dots: Vec<DotId>,
    pub dragging: bool,
    pub live_subscriptions: Vec<Listener>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    slide_count: usize,
    width: f32,
    mounted: bool,
    dots: Vec<DotId>,
    layout: Option<Layout>,
    offset: f32,
    transition: Duration,
    left_disabled: bool,
    right_disabled: bool,
    active_dots: BTreeSet<DotId>,
    dragging: bool,
    live: BTreeMap<SubscriptionId, Listener>,
    next_subscription: u64,
    stale_unsubscribes: usize,
    offset_writes: usize,
}

impl HeadlessSurface {
    pub fn new(slide_count: usize, width: f32) -> Self {
        Self {
            slide_count,
            width,
            ..Self::default()
        }
    }

    /// Simulate the host container changing size. The engine only notices
    /// once it receives a resize event.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn dot_ids(&self) -> &[DotId] {
        &self.dots
    }

    pub fn track_layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn is_nav_disabled(&self, control: NavControl) -> bool {
        match control {
            NavControl::Left => self.left_disabled,
            NavControl::Right => self.right_disabled,
        }
    }

    pub fn active_dots(&self) -> Vec<DotId> {
        self.active_dots.iter().copied().collect()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn live_subscriptions(&self) -> usize {
        self.live.len()
    }

    pub fn is_subscribed(&self, listener: Listener) -> bool {
        self.live.values().any(|l| *l == listener)
    }

    /// Unsubscribe calls for ids that were not live.
    pub fn stale_unsubscribes(&self) -> usize {
        self.stale_unsubscribes
    }

    /// How many times the track offset was written.
    pub fn offset_writes(&self) -> usize {
        self.offset_writes
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            layout: self.layout,
            offset: self.offset,
            transition: self.transition,
            left_disabled: self.left_disabled,
            right_disabled: self.right_disabled,
            active_dots: self.active_dots(),
            dragging: self.dragging,
            live_subscriptions: self.live.values().copied().collect(),
        }
    }
}

impl Surface for HeadlessSurface {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn mount(&mut self, dots: bool) -> Vec<DotId> {
        self.mounted = true;
        self.dots = if dots {
            (0..self.slide_count as u64)
                .map(|i| DotId(FIRST_DOT_ID + i))
                .collect()
        } else {
            Vec::new()
        };
        self.dots.clone()
    }

    fn measure_width(&self) -> f32 {
        self.width
    }

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.live.insert(id, listener);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.live.remove(&id).is_none() {
            self.stale_unsubscribes += 1;
        }
    }

    fn set_track_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    fn set_offset(&mut self, x: f32) {
        self.offset = x;
        self.offset_writes += 1;
    }

    fn set_transition(&mut self, duration: Duration) {
        self.transition = duration;
    }

    fn set_nav_disabled(&mut self, control: NavControl, disabled: bool) {
        match control {
            NavControl::Left => self.left_disabled = disabled,
            NavControl::Right => self.right_disabled = disabled,
        }
    }

    fn set_dot_active(&mut self, dot: DotId, active: bool) {
        if active {
            self.active_dots.insert(dot);
        } else {
            self.active_dots.remove(&dot);
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}
