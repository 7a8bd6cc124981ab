//! Data model definitions shared across slidekit crates.
#![allow(missing_docs)]

pub mod ids;
pub mod settings;
pub mod snapshot;

pub use ids::{DotId, NavControl};
pub use settings::{
    DEFAULT_AUTO_SPEED, DEFAULT_AUTOPLAY_BASE, DEFAULT_MARGIN,
    DEFAULT_RESIZE_DEBOUNCE, DEFAULT_SENSITIVITY, DEFAULT_SPEED,
    GalleryOptions, GallerySettings,
};
pub use snapshot::GallerySnapshot;
