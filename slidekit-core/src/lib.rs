//! Headless carousel engine.
//!
//! The engine owns a horizontally sliding track of equally sized slides.
//! It lays the track out from the measured container width, turns pointer
//! drags into swipes, drives the left/right buttons and dot indicators, and
//! advances on an autoplay timer. Rendering and input capture belong to the
//! host, reached through the [`Surface`] trait; timers go through a
//! [`Scheduler`] so tests and the simulator run on virtual time.
//!
//! ## Modules
//!
//! - [`layout`]: track geometry for a container width
//! - [`position`]: current slide and offset bookkeeping
//! - [`drag`]: rubber-banded drag sessions and swipe resolution
//! - [`transition`]: transition durations and offset tweening
//! - [`autoplay`] / [`debounce`]: timer-driven behaviour
//! - [`gallery`]: the [`Gallery`] facade tying everything together

#![allow(missing_docs)]

pub mod autoplay;
pub mod debounce;
pub mod dots;
pub mod drag;
pub mod error;
pub mod gallery;
pub mod headless;
pub mod layout;
pub mod navigation;
pub mod position;
pub mod scheduler;
pub mod subscriptions;
pub mod surface;
pub mod transition;

pub use error::{GalleryError, Result};
pub use gallery::{Gallery, GalleryEvent, Lifecycle};
pub use headless::{HeadlessSurface, SurfaceSnapshot};
pub use layout::{Layout, compute_layout};
pub use position::GalleryState;
pub use scheduler::{ManualScheduler, Scheduler, TimerId, TimerSpec};
pub use subscriptions::{Listener, SubscriptionId};
pub use surface::Surface;

pub use slidekit_model::{
    DotId, GalleryOptions, GallerySettings, GallerySnapshot, NavControl,
};
