//! Contract with the presentation layer that owns the visual nodes.

use std::time::Duration;

use slidekit_model::{DotId, NavControl};

use crate::layout::Layout;
use crate::subscriptions::{Listener, SubscriptionId};

/// Everything the engine needs from its host: the slide count and
/// measured width going in, presentation updates and listener
/// registration going out.
///
/// The host is expected to have built one container, a sliding track
/// holding one wrapper per slide, a previous/next control pair and, when
/// `mount` is asked for dots, one indicator per slide.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    /// Number of slide panels the host container holds.
    fn slide_count(&self) -> usize;

    /// Build the gallery structure. Returns the dot identities in slide
    /// order, or an empty list when `dots` is false.
    fn mount(&mut self, dots: bool) -> Vec<DotId>;

    /// Current width of the slide viewport in pixels.
    fn measure_width(&self) -> f32;

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId;

    fn unsubscribe(&mut self, id: SubscriptionId);

    fn set_track_layout(&mut self, layout: Layout);

    fn set_offset(&mut self, x: f32);

    fn set_transition(&mut self, duration: Duration);

    fn set_nav_disabled(&mut self, control: NavControl, disabled: bool);

    fn set_dot_active(&mut self, dot: DotId, active: bool);

    fn set_dragging(&mut self, dragging: bool);
}
