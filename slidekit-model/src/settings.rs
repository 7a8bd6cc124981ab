use std::time::Duration;

/// Gap between neighbouring slides, in pixels.
pub const DEFAULT_MARGIN: f32 = 10.0;
/// Minimum horizontal drag, in pixels, that commits a slide change.
pub const DEFAULT_SENSITIVITY: f32 = 40.0;
/// Seconds one single-slide transition takes.
pub const DEFAULT_SPEED: f32 = 0.5;
/// Autoplay frequency multiplier.
pub const DEFAULT_AUTO_SPEED: f32 = 1.0;
/// Autoplay interval at an `auto_speed` of 1.
pub const DEFAULT_AUTOPLAY_BASE: Duration = Duration::from_millis(5_000);
/// Window over which a burst of resize notifications is coalesced.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Gallery options as a caller supplies them. Every field is optional;
/// `GallerySettings::from_options` fills the gaps and clamps bad values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct GalleryOptions {
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub margin: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub sensitivity: Option<f32>,
    /// Transition speed divisor: a single-slide move lasts `1 / speed`
    /// seconds.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub speed: Option<f32>,
    /// Autoplay multiplier; `0` disables autoplay.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "autoSpeed", skip_serializing_if = "Option::is_none")
    )]
    pub auto_speed: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub dots: Option<bool>,
}

impl GalleryOptions {
    /// Overlay `other` on top of `self`, field by field.
    pub fn merged_with(&self, other: &GalleryOptions) -> GalleryOptions {
        GalleryOptions {
            margin: other.margin.or(self.margin),
            sensitivity: other.sensitivity.or(self.sensitivity),
            speed: other.speed.or(self.speed),
            auto_speed: other.auto_speed.or(self.auto_speed),
            dots: other.dots.or(self.dots),
        }
    }
}

/// Resolved, immutable gallery settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GallerySettings {
    pub margin: f32,
    pub sensitivity: f32,
    /// Seconds per single-slide transition.
    pub speed: f32,
    pub auto_speed: f32,
    pub dots: bool,
    pub autoplay_base: Duration,
    pub resize_debounce: Duration,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            sensitivity: DEFAULT_SENSITIVITY,
            speed: DEFAULT_SPEED,
            auto_speed: DEFAULT_AUTO_SPEED,
            dots: true,
            autoplay_base: DEFAULT_AUTOPLAY_BASE,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

impl GallerySettings {
    /// Resolve caller options. Values that would produce invalid geometry or
    /// timers are clamped so the dependent feature degrades instead.
    pub fn from_options(options: &GalleryOptions) -> Self {
        let speed = match options.speed {
            Some(divisor) if divisor.is_finite() && divisor > 0.0 => {
                1.0 / divisor
            }
            Some(divisor) => {
                tracing::warn!(
                    speed = divisor,
                    default = DEFAULT_SPEED,
                    "invalid speed, using default transition time"
                );
                DEFAULT_SPEED
            }
            None => DEFAULT_SPEED,
        };

        Self {
            margin: options.margin.unwrap_or(DEFAULT_MARGIN),
            sensitivity: options.sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
            speed,
            auto_speed: options.auto_speed.unwrap_or(DEFAULT_AUTO_SPEED),
            dots: options.dots.unwrap_or(true),
            ..Self::default()
        }
        .sanitized()
    }

    /// Clamp every field into its valid range. Settings built field by
    /// field go through this before the engine uses them.
    pub fn sanitized(self) -> Self {
        let speed = if self.speed.is_finite() && self.speed >= 0.0 {
            self.speed
        } else {
            tracing::warn!(
                speed = self.speed,
                default = DEFAULT_SPEED,
                "invalid transition time, using default"
            );
            DEFAULT_SPEED
        };

        Self {
            margin: non_negative("margin", self.margin),
            sensitivity: non_negative("sensitivity", self.sensitivity),
            speed,
            auto_speed: non_negative("auto_speed", self.auto_speed),
            ..self
        }
    }

    pub fn with_autoplay_base(mut self, base: Duration) -> Self {
        self.autoplay_base = base;
        self
    }

    pub fn with_resize_debounce(mut self, window: Duration) -> Self {
        self.resize_debounce = window;
        self
    }

    /// Interval between autoplay ticks, or `None` when autoplay is off.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        if self.auto_speed <= 0.0 || !self.auto_speed.is_finite() {
            return None;
        }
        Duration::try_from_secs_f64(
            self.autoplay_base.as_secs_f64() / f64::from(self.auto_speed),
        )
        .ok()
        .filter(|interval| !interval.is_zero())
    }
}

/// Negative or non-finite values become 0.
fn non_negative(field: &'static str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(field, value, "invalid setting, using 0");
        0.0
    }
}
