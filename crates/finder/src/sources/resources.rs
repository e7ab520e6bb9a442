//! Resource-based registries.
//!
//! Responsibilities:
//! - Read `META-INF/services/<id>` style resources from directory roots.
//! - Extract the single implementation name a resource names.
//!
//! Does NOT handle:
//! - Emitting deprecation warnings (see `finder/resolve.rs`).
//!
//! Invariants:
//! - Only the first line of a resource is significant; it is trimmed.
//! - A missing resource yields `Ok(None)`; a blank one yields an empty line.
//! - In `ResourceDirs`, the first root holding the resource decides, blank or not.
//! - Content that is not UTF-8 is a `LookupError::ResourceDecode`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::capability::LegacyRegistryLookup;
use crate::constants::SERVICES_PREFIX;
use crate::error::LookupError;

/// Name of the registry resource for `id`, e.g. `META-INF/services/OldFactory`.
pub fn resource_name(id: &str) -> String {
    format!("{SERVICES_PREFIX}/{id}")
}

/// Read the resource `name` under `root`, returning its first line, trimmed.
pub(crate) fn read_first_line(root: &Path, name: &str) -> Result<Option<String>, LookupError> {
    let path = root.join(name);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LookupError::ResourceRead {
                resource: name.to_string(),
                kind: e.kind(),
            });
        }
    };

    let content = String::from_utf8(bytes).map_err(|_| LookupError::ResourceDecode {
        resource: name.to_string(),
    })?;

    Ok(Some(
        content
            .lines()
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    ))
}

/// Legacy registry over an ordered list of resource roots.
///
/// The first root holding the resource wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDirs {
    roots: Vec<PathBuf>,
}

impl ResourceDirs {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl LegacyRegistryLookup for ResourceDirs {
    fn implementation_name(&self, legacy_id: &str) -> Result<Option<String>, LookupError> {
        let name = resource_name(legacy_id);
        for root in &self.roots {
            tracing::debug!(root = %root.display(), resource = %name, "Checking resource");
            if let Some(line) = read_first_line(root, &name)? {
                return Ok(Some(line).filter(|line| !line.is_empty()));
            }
        }
        Ok(None)
    }
}
