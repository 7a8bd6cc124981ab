//! Resolve a `SlidekitConfig` from files, inline JSON and the environment.
//!
//! Evaluation order:
//! 1) an explicit path given to the loader (the `--config` flag),
//! 2) `$SLIDEKIT_CONFIG_PATH` (TOML or JSON file),
//! 3) `$SLIDEKIT_CONFIG_JSON` (inline JSON),
//! 4) the first existing default file,
//! 5) built-in defaults.
//!
//! Per-field `SLIDEKIT_*` overrides are applied on top of whichever source
//! won.

pub mod env;
pub mod error;

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use self::env::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, env_overrides};
use self::error::ConfigLoadError;
use crate::models::SlidekitConfig;

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "slidekit.toml",
    "slidekit.json",
    "config/slidekit.toml",
    "config/slidekit.json",
];

/// Source that produced the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::Explicit(path) => {
                write!(f, "{} (--config)", path.display())
            }
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (${CONFIG_PATH_VAR})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_VAR}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    /// `.env` file to read before consulting the environment; a missing or
    /// unreadable file is an error. Without one the loader looks for `.env`
    /// in the working directory and its parents and skips it when absent.
    pub env_file: Option<PathBuf>,
    /// Directory relative paths and default files are resolved against.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Clone)]
enum EnvSource {
    #[default]
    Process,
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    fn var(&self, name: &str) -> Option<String> {
        let value = match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: SlidekitConfig,
    pub source: ConfigSource,
    /// Environment overrides that took effect.
    pub overrides: Vec<&'static str>,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
    env: EnvSource,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self {
            options,
            env: EnvSource::Process,
        }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.root = Some(root.into());
        self
    }

    /// Read variables from `vars` instead of the process environment. No
    /// `.env` file is consulted in this mode.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Fixed(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let (mut config, source) = self.load_document()?;
        let (overlay, overrides) = env_overrides(|name| self.env.var(name))?;
        config.gallery = config.gallery.merged_with(&overlay);

        info!(%source, "slidekit configuration loaded");
        if !overrides.is_empty() {
            debug!(?overrides, "environment overrides applied");
        }

        Ok(ConfigLoad {
            config,
            source,
            overrides,
            env_file_loaded,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if matches!(self.env, EnvSource::Fixed(_)) {
            return Ok(false);
        }
        if let Some(path) = &self.options.env_file {
            dotenvy::from_path(self.resolve(path))?;
            return Ok(true);
        }
        match dotenvy::dotenv() {
            Ok(_) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_document(
        &self,
    ) -> Result<(SlidekitConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let path = self.resolve(path);
            let config = Self::read_required(&path)?;
            return Ok((config, ConfigSource::Explicit(path)));
        }

        if let Some(raw) = self.env.var(CONFIG_PATH_VAR) {
            let path = self.resolve(Path::new(raw.trim()));
            let config = Self::read_required(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.env.var(CONFIG_JSON_VAR) {
            let config = SlidekitConfig::parse_json(&raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = SlidekitConfig::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((SlidekitConfig::default(), ConfigSource::Default))
    }

    fn read_required(path: &Path) -> Result<SlidekitConfig, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        SlidekitConfig::load_from_file(path)
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| self.resolve(Path::new(candidate)))
            .find(|path| path.is_file())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.options.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}
