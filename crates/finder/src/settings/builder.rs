//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` merging overrides, environment and defaults.
//! - Build and validate the final `FinderSettings`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Defaults apply to anything neither set nor present in the environment.

use std::path::PathBuf;

use super::FinderSettings;
use super::env::apply_env;
use super::error::SettingsError;
use crate::constants::{
    DEFAULT_CONFIG_FILE_NAME, DEFAULT_MODULE_NAME, ENV_CONFIG_FILE, ENV_DOTENV_DISABLED, ENV_MODULE,
};

/// Loader that builds `FinderSettings` from overrides and environment variables.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    home: Option<PathBuf>,
    config_file_name: Option<String>,
    resource_roots: Option<Vec<PathBuf>>,
    modules_root: Option<PathBuf>,
    module_name: Option<String>,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`SettingsError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`SettingsError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, SettingsError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(SettingsError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(SettingsError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(SettingsError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read settings from environment variables not already set on the loader.
    pub fn from_env(mut self) -> Result<Self, SettingsError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the platform home directory.
    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = Some(home);
        self
    }

    /// Set the configuration file name.
    pub fn with_config_file_name(mut self, name: String) -> Self {
        self.config_file_name = Some(name);
        self
    }

    /// Set the legacy resource roots.
    pub fn with_resource_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.resource_roots = Some(roots);
        self
    }

    /// Set the module discovery root.
    pub fn with_modules_root(mut self, root: PathBuf) -> Self {
        self.modules_root = Some(root);
        self
    }

    /// Set the module consulted by module discovery.
    pub fn with_module_name(mut self, name: String) -> Self {
        self.module_name = Some(name);
        self
    }

    /// Build the final settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if the configuration file name or
    /// the module name is blank, or if the file name contains a path separator.
    pub fn build(self) -> Result<FinderSettings, SettingsError> {
        let config_file_name = self
            .config_file_name
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE_NAME.to_string());
        if config_file_name.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                var: ENV_CONFIG_FILE.to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if config_file_name.contains(['/', '\\']) {
            return Err(SettingsError::InvalidValue {
                var: ENV_CONFIG_FILE.to_string(),
                message: "must be a file name, not a path".to_string(),
            });
        }

        let module_name = self
            .module_name
            .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string());
        if module_name.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                var: ENV_MODULE.to_string(),
                message: "must not be blank".to_string(),
            });
        }

        Ok(FinderSettings {
            home: self.home,
            config_file_name,
            resource_roots: self.resource_roots.unwrap_or_default(),
            modules_root: self.modules_root,
            module_name,
        })
    }

    // Accessors and setters for env.rs

    pub(crate) fn home(&self) -> Option<&PathBuf> {
        self.home.as_ref()
    }

    pub(crate) fn set_home(&mut self, home: Option<PathBuf>) {
        self.home = home;
    }

    pub(crate) fn config_file_name(&self) -> Option<&String> {
        self.config_file_name.as_ref()
    }

    pub(crate) fn set_config_file_name(&mut self, name: Option<String>) {
        self.config_file_name = name;
    }

    pub(crate) fn resource_roots(&self) -> Option<&Vec<PathBuf>> {
        self.resource_roots.as_ref()
    }

    pub(crate) fn set_resource_roots(&mut self, roots: Option<Vec<PathBuf>>) {
        self.resource_roots = roots;
    }

    pub(crate) fn modules_root(&self) -> Option<&PathBuf> {
        self.modules_root.as_ref()
    }

    pub(crate) fn set_modules_root(&mut self, root: Option<PathBuf>) {
        self.modules_root = root;
    }

    pub(crate) fn module_name(&self) -> Option<&String> {
        self.module_name.as_ref()
    }

    pub(crate) fn set_module_name(&mut self, name: Option<String>) {
        self.module_name = name;
    }
}
