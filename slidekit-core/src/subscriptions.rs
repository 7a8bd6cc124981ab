//! Registry of live event subscriptions on the host surface.
//!
//! Every listener the engine registers is recorded here so teardown can
//! release each one exactly once, including the pointer-move listener that
//! only exists while a drag is in progress.

use crate::surface::Surface;

/// Input the engine listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    Resize,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    ClickLeft,
    ClickRight,
    ClickDots,
}

impl Listener {
    /// Listeners registered for the whole lifetime of a gallery.
    pub fn lifetime_set(dots: bool) -> Vec<Listener> {
        let mut set = vec![
            Listener::Resize,
            Listener::PointerDown,
            Listener::PointerUp,
            Listener::PointerCancel,
            Listener::ClickLeft,
            Listener::ClickRight,
        ];
        if dots {
            set.push(Listener::ClickDots);
        }
        set
    }
}

/// Handle returned by the host for one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subscriptions {
    entries: Vec<(Listener, SubscriptionId)>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_active(&self, listener: Listener) -> bool {
        self.entries.iter().any(|(l, _)| *l == listener)
    }

    /// Register `listener` unless it is already live.
    pub fn register<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        listener: Listener,
    ) -> SubscriptionId {
        if let Some((_, id)) =
            self.entries.iter().find(|(l, _)| *l == listener)
        {
            return *id;
        }
        let id = surface.subscribe(listener);
        self.entries.push((listener, id));
        id
    }

    /// Release one listener. Returns `false` when it was not live.
    pub fn release<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        listener: Listener,
    ) -> bool {
        match self.entries.iter().position(|(l, _)| *l == listener) {
            Some(pos) => {
                let (_, id) = self.entries.remove(pos);
                surface.unsubscribe(id);
                true
            }
            None => false,
        }
    }

    /// Release everything in registration order. Returns how many
    /// subscriptions were removed.
    pub fn drain_into<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let count = self.entries.len();
        for (_, id) in self.entries.drain(..) {
            surface.unsubscribe(id);
        }
        count
    }
}
