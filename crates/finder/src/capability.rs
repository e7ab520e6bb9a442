//! Lookup capabilities injected into the finder.
//!
//! Responsibilities:
//! - Define the leaf I/O primitives the resolver composes.
//! - Keep every capability `Send + Sync` so a finder can be shared across threads.
//!
//! Does NOT handle:
//! - Precedence between sources (see `finder/resolve.rs`).
//! - Concrete implementations (see `sources/` and `instantiate.rs`).
//!
//! Invariants:
//! - `Ok(None)` means "this source has nothing"; `Err` means it could not be read.
//! - Capabilities never mutate the process environment or the file system.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::contract::ContractId;
use crate::error::{InstantiationError, LookupError};

/// Process-wide key/value store, such as the environment.
pub trait PropertyLookup: Send + Sync {
    fn property(&self, key: &str) -> Option<String>;
}

/// The optional well-known configuration file.
pub trait FileConfigLookup: Send + Sync {
    /// Read the file. `Ok(None)` when no file exists at any candidate path.
    fn read(&self) -> Result<Option<ConfigEntries>, LookupError>;
}

/// Key/value entries read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEntries {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigEntries {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Later entries for the same key replace earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Path the entries were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ready-made providers registered for a contract.
pub type ProviderIter<'a, T> = Box<dyn Iterator<Item = Result<Box<T>, InstantiationError>> + 'a>;

/// Discovery mechanism returning instances registered against a contract.
pub trait ServiceRegistry<T: ?Sized>: Send + Sync {
    fn providers(&self, contract: &ContractId) -> Result<ProviderIter<'_, T>, LookupError>;
}

/// Deprecated registry mapping a legacy identifier to a single type name.
pub trait LegacyRegistryLookup: Send + Sync {
    fn implementation_name(&self, legacy_id: &str) -> Result<Option<String>, LookupError>;
}

/// Turns a type name into an instance of the contract.
pub trait Instantiator<T: ?Sized>: Send + Sync {
    /// `default_name` is only used to tell whether `type_name` is the built-in default.
    fn instantiate(
        &self,
        type_name: &str,
        default_name: Option<&str>,
    ) -> Result<Box<T>, InstantiationError>;
}

/// Optional, host-specific modular loading mechanism.
pub trait ModuleRegistry<T: ?Sized>: Send + Sync {
    /// Load `module`. `Ok(None)` when the mechanism or the module is absent.
    fn load_module(&self, module: &str) -> Result<Option<Box<dyn ModuleHandle<T> + '_>>, LookupError>;
}

/// A loaded module: its resources and its own instantiation context.
pub trait ModuleHandle<T: ?Sized> {
    /// Content of resource `name`. `Ok(None)` only when the resource does not exist;
    /// a blank resource is `Ok(Some(""))`.
    fn resource(&self, name: &str) -> Result<Option<String>, LookupError>;

    fn instantiator(&self) -> &dyn Instantiator<T>;
}

impl<T: ?Sized, I: Instantiator<T> + ?Sized> Instantiator<T> for std::sync::Arc<I> {
    fn instantiate(
        &self,
        type_name: &str,
        default_name: Option<&str>,
    ) -> Result<Box<T>, InstantiationError> {
        (**self).instantiate(type_name, default_name)
    }
}

impl<P: PropertyLookup + ?Sized> PropertyLookup for std::sync::Arc<P> {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}
