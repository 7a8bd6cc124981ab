use crate::loader::error::ConfigLoadError;

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a finite number for the env override `name`.
pub fn parse_number(
    name: &'static str,
    raw: &str,
) -> Result<f32, ConfigLoadError> {
    let value: f32 =
        raw.trim()
            .parse()
            .map_err(|err: std::num::ParseFloatError| {
                ConfigLoadError::InvalidEnv {
                    name,
                    value: raw.to_string(),
                    reason: err.to_string(),
                }
            })?;
    if !value.is_finite() {
        return Err(ConfigLoadError::InvalidEnv {
            name,
            value: raw.to_string(),
            reason: "value must be finite".into(),
        });
    }
    Ok(value)
}

/// Parse a boolean for the env override `name`.
pub fn parse_flag(
    name: &'static str,
    raw: &str,
) -> Result<bool, ConfigLoadError> {
    parse_bool(raw).ok_or_else(|| ConfigLoadError::InvalidEnv {
        name,
        value: raw.to_string(),
        reason: "expected one of 1/0, true/false, yes/no, on/off".into(),
    })
}
