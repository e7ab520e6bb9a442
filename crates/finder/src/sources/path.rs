//! Path helpers for the well-known configuration file.
//!
//! Responsibilities:
//! - Determine the primary and legacy locations of the configuration file.
//! - Use `directories` crate for platform-appropriate paths when no home is configured.
//!
//! Does NOT handle:
//! - File I/O operations (see `file.rs`).

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::{APPLICATION_NAME, CONFIG_SUBDIR, LEGACY_CONFIG_SUBDIR};

/// Candidate paths of the well-known configuration file.
///
/// The primary path is checked first; the legacy path only when the primary
/// file does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileLocation {
    primary: PathBuf,
    legacy: Option<PathBuf>,
}

impl ConfigFileLocation {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            legacy: None,
        }
    }

    pub fn with_legacy(mut self, legacy: impl Into<PathBuf>) -> Self {
        self.legacy = Some(legacy.into());
        self
    }

    /// `<home>/conf/<file_name>`, falling back to `<home>/lib/<file_name>`.
    pub fn for_home(home: &Path, file_name: &str) -> Self {
        Self::new(home.join(CONFIG_SUBDIR).join(file_name))
            .with_legacy(home.join(LEGACY_CONFIG_SUBDIR).join(file_name))
    }

    /// Platform configuration directory, falling back to the older project layout.
    ///
    /// - Linux/macOS: `~/.config/factory-finder/<file_name>`
    /// - Windows: `%AppData%\factory-finder\<file_name>`
    pub fn platform_default(file_name: &str) -> Result<Self, anyhow::Error> {
        let location = Self::new(default_config_dir()?.join(file_name));
        Ok(match legacy_config_dir() {
            Ok(dir) => location.with_legacy(dir.join(file_name)),
            Err(_) => location,
        })
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn legacy(&self) -> Option<&Path> {
        self.legacy.as_deref()
    }

    /// The first candidate that exists, if any.
    pub fn existing(&self) -> Option<&Path> {
        std::iter::once(self.primary.as_path())
            .chain(self.legacy.as_deref())
            .find(|path| {
                tracing::debug!(path = %path.display(), "Checking configuration file");
                path.exists()
            })
    }
}

/// Returns the documented configuration directory.
pub(crate) fn default_config_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APPLICATION_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Returns the configuration directory used by older releases.
///
/// Older releases used `ProjectDirs::from("com", APPLICATION_NAME, APPLICATION_NAME)`,
/// which produced a redundant directory segment like `.../factory-finder/factory-finder/`.
pub(crate) fn legacy_config_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("com", APPLICATION_NAME, APPLICATION_NAME)
        .context("Failed to determine legacy project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}
