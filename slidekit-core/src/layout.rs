//! Track geometry derived from the measured container width.

/// Geometry of the sliding track for one measured container width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Width of one slide viewport; equals the container width.
    pub width: f32,
    /// Gap to the right of every slide.
    pub margin: f32,
    /// Sum of all slide widths and their trailing margins.
    pub track_width: f32,
    /// Most negative legal offset. Zero for zero or one slides.
    pub maximum_x: f32,
}

impl Layout {
    /// Distance between the left edges of two neighbouring slides.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.width + self.margin
    }

    /// Offset that brings `index` to the front of the viewport.
    #[inline]
    pub fn target_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.stride()
    }

    /// Whether `x` lies inside the resting range `[maximum_x, 0]`.
    pub fn contains(&self, x: f32) -> bool {
        x <= 0.0 && x >= self.maximum_x
    }
}

/// Compute the track geometry for `slide_count` slides in a container of
/// `container_width` pixels.
pub fn compute_layout(
    container_width: f32,
    slide_count: usize,
    margin: f32,
) -> Layout {
    let width = if container_width.is_finite() {
        container_width.max(0.0)
    } else {
        0.0
    };
    let stride = width + margin;
    let maximum_x = if slide_count <= 1 {
        0.0
    } else {
        -((slide_count - 1) as f32) * stride
    };

    Layout {
        width,
        margin,
        track_width: slide_count as f32 * stride,
        maximum_x,
    }
}
