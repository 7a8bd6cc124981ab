//! Per-field environment overrides applied after the configuration
//! document is loaded.

use slidekit_model::GalleryOptions;

use super::error::ConfigLoadError;
use crate::util::{parse_flag, parse_number};

pub const CONFIG_PATH_VAR: &str = "SLIDEKIT_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "SLIDEKIT_CONFIG_JSON";

pub const MARGIN_VAR: &str = "SLIDEKIT_MARGIN";
pub const SENSITIVITY_VAR: &str = "SLIDEKIT_SENSITIVITY";
pub const SPEED_VAR: &str = "SLIDEKIT_SPEED";
pub const AUTO_SPEED_VAR: &str = "SLIDEKIT_AUTO_SPEED";
pub const DOTS_VAR: &str = "SLIDEKIT_DOTS";

/// Collect every override that is set into a sparse options overlay,
/// along with the variables that took effect in application order.
pub(crate) fn env_overrides<F>(
    lookup: F,
) -> Result<(GalleryOptions, Vec<&'static str>), ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut overlay = GalleryOptions::default();
    let mut applied = Vec::new();

    let numeric: [(&'static str, &mut Option<f32>); 4] = [
        (MARGIN_VAR, &mut overlay.margin),
        (SENSITIVITY_VAR, &mut overlay.sensitivity),
        (SPEED_VAR, &mut overlay.speed),
        (AUTO_SPEED_VAR, &mut overlay.auto_speed),
    ];
    for (name, slot) in numeric {
        if let Some(raw) = lookup(name) {
            *slot = Some(parse_number(name, &raw)?);
            applied.push(name);
        }
    }

    if let Some(raw) = lookup(DOTS_VAR) {
        overlay.dots = Some(parse_flag(DOTS_VAR, &raw)?);
        applied.push(DOTS_VAR);
    }

    Ok((overlay, applied))
}
