//! Configuration models.

pub mod timing;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use slidekit_model::{GalleryOptions, GallerySettings};

use crate::loader::error::ConfigLoadError;

pub use timing::TimingConfig;

/// Top-level configuration document.
///
/// ```toml
/// [gallery]
/// margin = 16
/// speed = 4
/// auto_speed = 0.5
/// dots = true
///
/// [host]
/// width = 800
/// slides = 6
///
/// [timing]
/// autoplay_base = "5s"
/// resize_debounce = "100ms"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidekitConfig {
    /// Options handed to the gallery. Missing fields fall back to the
    /// gallery defaults.
    pub gallery: GalleryOptions,
    /// Simulated host used by `slidekit-sim` when no flags override it.
    pub host: HostConfig,
    pub timing: TimingConfig,
}

/// Container the simulator pretends to render into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Container width in pixels.
    pub width: f32,
    pub slides: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            slides: 5,
        }
    }
}

impl SlidekitConfig {
    /// Resolve the gallery settings, clamping invalid option values.
    pub fn settings(&self) -> GallerySettings {
        GallerySettings::from_options(&self.gallery)
            .with_autoplay_base(self.timing.autoplay_base)
            .with_resize_debounce(self.timing.resize_debounce)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }
}
