//! Contract identity and resolution requests.
//!
//! Responsibilities:
//! - Name the abstract factory contract being resolved (`ContractId`).
//! - Bundle the per-call inputs of a resolution into a `FactoryRequest`.
//! - Describe where a resolved provider came from (`Source`, `Resolved`).
//!
//! Invariants:
//! - Requests are immutable once handed to the finder.
//! - Fallback to the default is enabled unless explicitly disabled.

use std::fmt;

use serde::Serialize;

/// Stable identifier of an abstract factory contract, usually a fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContractId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ContractId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Inputs of a single resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryRequest {
    contract: ContractId,
    legacy_id: Option<String>,
    default_name: Option<String>,
    try_fallback: bool,
}

impl FactoryRequest {
    /// Create a request for `contract` with no legacy id, no default, and fallback enabled.
    pub fn new(contract: impl Into<ContractId>) -> Self {
        Self {
            contract: contract.into(),
            legacy_id: None,
            default_name: None,
            try_fallback: true,
        }
    }

    /// Set the deprecated identifier still honoured for backward compatibility.
    pub fn with_legacy_id(mut self, legacy_id: impl Into<String>) -> Self {
        self.legacy_id = Some(legacy_id.into());
        self
    }

    /// Set the built-in implementation used when nothing else is configured.
    pub fn with_default(mut self, default_name: impl Into<String>) -> Self {
        self.default_name = Some(default_name.into());
        self
    }

    /// Set whether the default may be used when every source comes up empty.
    pub fn with_fallback(mut self, try_fallback: bool) -> Self {
        self.try_fallback = try_fallback;
        self
    }

    /// Return "not found" instead of falling back when nothing is configured.
    pub fn without_fallback(self) -> Self {
        self.with_fallback(false)
    }

    pub fn contract(&self) -> &ContractId {
        &self.contract
    }

    pub fn legacy_id(&self) -> Option<&str> {
        self.legacy_id.as_deref()
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default_name.as_deref()
    }

    pub fn try_fallback(&self) -> bool {
        self.try_fallback
    }
}

/// The configuration source that supplied a resolved provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Property,
    ConfigFile,
    ServiceRegistry,
    Module,
    LegacyRegistry,
    Default,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Source::Property => "property",
            Source::ConfigFile => "config-file",
            Source::ServiceRegistry => "service-registry",
            Source::Module => "module",
            Source::LegacyRegistry => "legacy-registry",
            Source::Default => "default",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully constructed provider and where it came from.
pub struct Resolved<T: ?Sized> {
    pub instance: Box<T>,
    pub source: Source,
    /// Type name that was instantiated; `None` for service registry providers.
    pub type_name: Option<String>,
}

impl<T: ?Sized> Resolved<T> {
    pub fn into_instance(self) -> Box<T> {
        self.instance
    }
}

impl<T: ?Sized> fmt::Debug for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("source", &self.source)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_enable_fallback() {
        let request = FactoryRequest::new("com.example.MessageFactory");

        assert_eq!(request.contract().as_str(), "com.example.MessageFactory");
        assert!(request.try_fallback());
        assert!(request.legacy_id().is_none());
        assert!(request.default_name().is_none());
    }

    #[test]
    fn test_request_builder() {
        let request = FactoryRequest::new("com.example.MessageFactory")
            .with_legacy_id("OldFactory")
            .with_default("com.example.DefaultMessageFactory")
            .without_fallback();

        assert_eq!(request.legacy_id(), Some("OldFactory"));
        assert_eq!(
            request.default_name(),
            Some("com.example.DefaultMessageFactory")
        );
        assert!(!request.try_fallback());
    }

    #[test]
    fn test_source_serializes_snake_case() {
        let json = serde_json::to_string(&Source::LegacyRegistry).unwrap();
        assert_eq!(json, "\"legacy_registry\"");
        assert_eq!(Source::ConfigFile.to_string(), "config-file");
    }
}
