//! Configuration loading for slidekit hosts and the `slidekit-sim` replay
//! tool.
//!
//! Settings come from a TOML or JSON file (or inline JSON), with per-field
//! environment overrides layered on top. [`ConfigLoader`] reports where the
//! configuration came from so hosts can log it. The [`sim`] module drives a
//! headless gallery from a recorded script on virtual time.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod script;
pub mod sim;
pub mod util;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigSource,
    error::ConfigLoadError,
};
pub use models::{HostConfig, SlidekitConfig, TimingConfig};
pub use script::{ScriptEvent, ScriptStep};
pub use sim::{Simulation, StepReport, TeardownReport};
