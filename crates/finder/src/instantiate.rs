//! Instantiator implementations.
//!
//! Responsibilities:
//! - Map type names to constructors of the contract type (`TypeCatalog`).
//! - Validate type names without constructing anything (`NameOnly`).
//!
//! Does NOT handle:
//! - Deciding whether a failure is fatal (see `finder/resolve.rs`).
//!
//! Invariants:
//! - Blank names are rejected with `InstantiationError::InvalidName`.
//! - When the requested name is the default, the builtin tier is consulted first,
//!   so a host registration can never shadow the bundled default.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::capability::Instantiator;
use crate::error::InstantiationError;

type Constructor<T> = Box<dyn Fn() -> Result<Box<T>, String> + Send + Sync>;

enum CatalogEntry<T: ?Sized> {
    Concrete(Constructor<T>),
    Abstract,
}

/// Named constructors for a contract, split into host and builtin tiers.
///
/// Host types are those registered by the embedding application; builtin types
/// ship with the library defining the contract.
pub struct TypeCatalog<T: ?Sized> {
    host: HashMap<String, CatalogEntry<T>>,
    builtin: HashMap<String, CatalogEntry<T>>,
}

impl<T: ?Sized> Default for TypeCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> TypeCatalog<T> {
    pub fn new() -> Self {
        Self {
            host: HashMap::new(),
            builtin: HashMap::new(),
        }
    }

    /// Register a host type.
    pub fn with_type<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<T>, String> + Send + Sync + 'static,
    {
        self.host
            .insert(name.into(), CatalogEntry::Concrete(Box::new(factory)));
        self
    }

    /// Register a type bundled with the contract's library.
    pub fn with_builtin<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<T>, String> + Send + Sync + 'static,
    {
        self.builtin
            .insert(name.into(), CatalogEntry::Concrete(Box::new(factory)));
        self
    }

    /// Register a name that is known but cannot be instantiated as the contract.
    pub fn with_abstract(mut self, name: impl Into<String>) -> Self {
        self.host.insert(name.into(), CatalogEntry::Abstract);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.host.contains_key(name) || self.builtin.contains_key(name)
    }

    fn entry(&self, name: &str, is_default: bool) -> Option<&CatalogEntry<T>> {
        let (first, second) = if is_default {
            (&self.builtin, &self.host)
        } else {
            (&self.host, &self.builtin)
        };
        first.get(name).or_else(|| second.get(name))
    }
}

impl<T: ?Sized> Instantiator<T> for TypeCatalog<T> {
    fn instantiate(
        &self,
        type_name: &str,
        default_name: Option<&str>,
    ) -> Result<Box<T>, InstantiationError> {
        let name = type_name.trim();
        if name.is_empty() {
            return Err(InstantiationError::InvalidName(type_name.to_string()));
        }

        let is_default = default_name == Some(name);
        match self.entry(name, is_default) {
            Some(CatalogEntry::Concrete(factory)) => {
                factory().map_err(|message| InstantiationError::Construction {
                    type_name: name.to_string(),
                    message,
                })
            }
            Some(CatalogEntry::Abstract) => Err(InstantiationError::NotInstantiable(name.to_string())),
            None => Err(InstantiationError::UnknownType(name.to_string())),
        }
    }
}

impl<T: ?Sized> fmt::Debug for TypeCatalog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut host: Vec<&str> = self.host.keys().map(String::as_str).collect();
        let mut builtin: Vec<&str> = self.builtin.keys().map(String::as_str).collect();
        host.sort_unstable();
        builtin.sort_unstable();
        f.debug_struct("TypeCatalog")
            .field("host", &host)
            .field("builtin", &builtin)
            .finish()
    }
}

/// A validated provider type name, produced by [`NameOnly`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Instantiator that accepts any well-formed type name and returns it.
///
/// Useful for reporting which implementation would be selected without
/// constructing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOnly;

impl Instantiator<ProviderName> for NameOnly {
    fn instantiate(
        &self,
        type_name: &str,
        _default_name: Option<&str>,
    ) -> Result<Box<ProviderName>, InstantiationError> {
        let name = type_name.trim();
        if is_type_path(name) {
            Ok(Box::new(ProviderName(name.to_string())))
        } else {
            Err(InstantiationError::InvalidName(type_name.to_string()))
        }
    }
}

/// `a.b.C`, `a::b::C` or `a.b.C$Inner`: non-empty identifier segments.
pub fn is_type_path(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let separator = if name.contains("::") { "::" } else { "." };
    name.split(separator).all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
