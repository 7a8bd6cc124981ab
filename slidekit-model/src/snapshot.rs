use std::time::Duration;

/// Point-in-time view of everything the engine has pushed to the
/// presentation layer, plus the index bookkeeping behind it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GallerySnapshot {
    pub size: usize,
    pub current_slide: usize,
    pub prev_slide: usize,
    pub width: f32,
    pub offset: f32,
    pub maximum_offset: f32,
    #[cfg_attr(feature = "serde", serde(with = "secs_f32"))]
    pub transition: Duration,
    pub left_disabled: bool,
    pub right_disabled: bool,
    pub active_dot: Option<usize>,
    pub dragging: bool,
}

impl GallerySnapshot {
    /// Single-line human readable rendering used by the simulator.
    pub fn summary(&self) -> String {
        let dot = self
            .active_dot
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "slide {}/{} x={:.1} [{:.1}..0] t={:.3}s nav={}{} dot={} {}",
            self.current_slide + 1,
            self.size,
            self.offset,
            self.maximum_offset,
            self.transition.as_secs_f32(),
            if self.left_disabled { '-' } else { '<' },
            if self.right_disabled { '-' } else { '>' },
            dot,
            if self.dragging { "dragging" } else { "idle" },
        )
    }
}

#[cfg(feature = "serde")]
mod secs_f32 {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(value.as_secs_f32())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let secs = f32::deserialize(deserializer)?;
        Duration::try_from_secs_f32(secs).map_err(serde::de::Error::custom)
    }
}
