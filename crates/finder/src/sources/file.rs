//! The well-known configuration file, in Java properties format.
//!
//! Responsibilities:
//! - Locate the configuration file (primary path, then legacy path).
//! - Parse its entries without touching or expanding the process environment.
//!
//! Does NOT handle:
//! - Primary/legacy key ordering (see `finder/resolve.rs`).
//! - Writing or migrating the file.
//!
//! Invariants:
//! - A file missing at every candidate path is not an error.
//! - Parse errors never include raw line contents.

use std::path::Path;

use super::path::ConfigFileLocation;
use crate::capability::{ConfigEntries, FileConfigLookup};
use crate::error::LookupError;

/// Configuration file in Java properties format (`key=value` or `key: value`, `#`/`!` comments,
/// backslash escapes and line continuations).
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    location: Result<ConfigFileLocation, String>,
}

impl PropertiesFile {
    pub fn new(location: ConfigFileLocation) -> Self {
        Self {
            location: Ok(location),
        }
    }

    /// A file whose location could not be determined on this host.
    ///
    /// Every read reports `LookupError::LocationUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            location: Err(reason.into()),
        }
    }

    /// The file at the platform configuration directory.
    pub fn platform_default(file_name: &str) -> Self {
        match ConfigFileLocation::platform_default(file_name) {
            Ok(location) => Self::new(location),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }

    pub fn location(&self) -> Option<&ConfigFileLocation> {
        self.location.as_ref().ok()
    }
}

impl FileConfigLookup for PropertiesFile {
    fn read(&self) -> Result<Option<ConfigEntries>, LookupError> {
        let location = self
            .location
            .as_ref()
            .map_err(|reason| LookupError::LocationUnavailable(reason.clone()))?;

        match location.existing() {
            Some(path) => read_properties(path).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse every entry of the file at `path`.
///
/// Values are taken as written: `$` and `{}` carry no meaning.
pub(crate) fn read_properties(path: &Path) -> Result<ConfigEntries, LookupError> {
    let bytes = std::fs::read(path).map_err(|e| LookupError::FileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    let values = java_properties::read(bytes.as_slice()).map_err(|e| LookupError::FileParse {
        path: path.to_path_buf(),
        line: e.line_number().unwrap_or(0),
    })?;

    let mut entries = ConfigEntries::new(path);
    for (key, value) in values {
        entries.insert(key, value);
    }
    Ok(entries)
}
