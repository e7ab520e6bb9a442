//! Finder settings: where the standard sources live.
//!
//! Responsibilities:
//! - Describe the locations of the configuration file, legacy resources and modules.
//! - Load those locations from `.env` files, environment variables and builder overrides.
//!
//! Does NOT handle:
//! - Reading any of the sources (see `sources/`).
//! - Provider names themselves; those come from the sources at resolution time.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

use std::path::PathBuf;

use serde::Serialize;

pub use builder::SettingsLoader;
pub use error::SettingsError;

use crate::constants::{DEFAULT_CONFIG_FILE_NAME, DEFAULT_MODULE_NAME};
use crate::sources::ConfigFileLocation;

/// Resolved locations of the standard sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinderSettings {
    /// Platform home holding `conf/` and `lib/`; the platform config directory is used when unset.
    pub home: Option<PathBuf>,
    /// File name of the well-known configuration file.
    pub config_file_name: String,
    /// Roots of the legacy resource registry, in lookup order.
    pub resource_roots: Vec<PathBuf>,
    /// Root of module discovery; discovery is disabled when unset.
    pub modules_root: Option<PathBuf>,
    /// Module consulted by module discovery.
    pub module_name: String,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            home: None,
            config_file_name: DEFAULT_CONFIG_FILE_NAME.to_string(),
            resource_roots: Vec::new(),
            modules_root: None,
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

impl FinderSettings {
    /// Candidate paths of the well-known configuration file.
    pub fn config_location(&self) -> Result<ConfigFileLocation, anyhow::Error> {
        match &self.home {
            Some(home) => Ok(ConfigFileLocation::for_home(home, &self.config_file_name)),
            None => ConfigFileLocation::platform_default(&self.config_file_name),
        }
    }
}
