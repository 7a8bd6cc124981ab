use std::time::Duration;

use serde::{Deserialize, Serialize};
use slidekit_model::{DEFAULT_AUTOPLAY_BASE, DEFAULT_RESIZE_DEBOUNCE};

/// Timer tuning. Values are human-readable durations such as `"100ms"` or
/// `"5s"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Autoplay interval at an `auto_speed` of 1. The effective interval is
    /// this divided by `auto_speed`.
    #[serde(with = "humantime_duration")]
    pub autoplay_base: Duration,
    /// Quiet period after the last resize notification before the track is
    /// laid out again.
    #[serde(with = "humantime_duration")]
    pub resize_debounce: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            autoplay_base: DEFAULT_AUTOPLAY_BASE,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_human_readable_text() {
        let json = serde_json::to_string(&TimingConfig::default()).unwrap();
        assert_eq!(json, r#"{"autoplay_base":"5s","resize_debounce":"100ms"}"#);
    }

    #[test]
    fn rejects_bare_numbers() {
        let err = serde_json::from_str::<TimingConfig>(
            r#"{"resize_debounce": "100"}"#,
        );
        assert!(err.is_err());
    }
}
