//! Slide index and track offset bookkeeping.
//!
//! `GalleryState` is the single owner of `current_slide` and the offset.
//! Writes go through `commit`, `apply_layout` and `set_drag_offset`, all
//! crate-private, so the index and offset cannot drift apart.

use crate::layout::Layout;

/// Result of a committed slide change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideChange {
    pub prev: usize,
    pub current: usize,
    pub offset: f32,
}

/// Mutable carousel position state.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    size: usize,
    current_slide: usize,
    prev_slide: usize,
    layout: Layout,
    x: f32,
}

impl GalleryState {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            current_slide: 0,
            prev_slide: 0,
            layout: Layout::default(),
            x: 0.0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn prev_slide(&self) -> usize {
        self.prev_slide
    }

    pub fn last_index(&self) -> usize {
        self.size.saturating_sub(1)
    }

    pub fn width(&self) -> f32 {
        self.layout.width
    }

    pub fn maximum_x(&self) -> f32 {
        self.layout.maximum_x
    }

    /// Current track offset.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn target_offset(&self, index: usize) -> f32 {
        self.layout.target_offset(index)
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.size
    }

    /// Move to `index`. Returns `None`, leaving every field untouched, when
    /// the index is out of range.
    pub(crate) fn commit(&mut self, index: usize) -> Option<SlideChange> {
        if !self.is_valid_index(index) {
            return None;
        }
        self.prev_slide = self.current_slide;
        self.current_slide = index;
        self.x = self.target_offset(index);
        Some(SlideChange {
            prev: self.prev_slide,
            current: self.current_slide,
            offset: self.x,
        })
    }

    /// Install new geometry and re-seat the offset on the current slide.
    pub(crate) fn apply_layout(&mut self, layout: Layout) -> f32 {
        self.layout = layout;
        self.x = self.target_offset(self.current_slide);
        self.x
    }

    /// Pointer-tracked offset while a drag is in progress.
    pub(crate) fn set_drag_offset(&mut self, x: f32) {
        self.x = x;
    }

    /// Drop any pointer-tracked offset and rest on the current slide.
    pub(crate) fn settle(&mut self) -> f32 {
        self.x = self.target_offset(self.current_slide);
        self.x
    }
}
