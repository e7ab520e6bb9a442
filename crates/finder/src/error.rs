//! Error types for provider resolution.
//!
//! Responsibilities:
//! - Define the fatal errors returned by `ProviderFinder::find`.
//! - Define instantiation failures reported by `Instantiator` implementations.
//! - Define non-fatal lookup failures reported by configuration sources.
//!
//! Does NOT handle:
//! - Deciding which failures are fatal (see `finder/resolve.rs`).
//! - Settings loading errors (see `settings/error.rs`).
//!
//! Invariants:
//! - Every `FinderError` names the contract that could not be resolved.
//! - File parse errors only carry the line number of the failure, never raw line content.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::contract::ContractId;

/// Failures surfaced to the caller of a resolution.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Fallback was allowed, nothing was configured, and there is no default.
    #[error("Provider for {contract} cannot be found")]
    NoProviderFound { contract: ContractId },

    /// The built-in default could not be constructed.
    #[error("Unable to create default provider {type_name} for {contract}")]
    DefaultInstantiation {
        contract: ContractId,
        type_name: String,
        #[source]
        source: InstantiationError,
    },
}

impl FinderError {
    /// The contract this failure refers to.
    pub fn contract(&self) -> &ContractId {
        match self {
            FinderError::NoProviderFound { contract } => contract,
            FinderError::DefaultInstantiation { contract, .. } => contract,
        }
    }
}

/// A type name could not be turned into an instance of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstantiationError {
    #[error("Provider name is blank or malformed: {0:?}")]
    InvalidName(String),

    #[error("Provider {0} not found")]
    UnknownType(String),

    #[error("Provider {0} could not be instantiated")]
    NotInstantiable(String),

    #[error("Provider {type_name} failed during construction: {message}")]
    Construction { type_name: String, message: String },
}

impl InstantiationError {
    /// Name of the type that failed.
    pub fn type_name(&self) -> &str {
        match self {
            InstantiationError::InvalidName(name)
            | InstantiationError::UnknownType(name)
            | InstantiationError::NotInstantiable(name) => name,
            InstantiationError::Construction { type_name, .. } => type_name,
        }
    }
}

/// A configuration source could not be read.
///
/// Never fatal during resolution: the source is treated as having produced nothing.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Unable to determine configuration location: {0}")]
    LocationUnavailable(String),

    #[error("Failed to read configuration file at {path}: {kind}")]
    FileRead { path: PathBuf, kind: ErrorKind },

    /// SAFETY: only the line number of the failure is kept, never the offending line.
    #[error("Failed to parse configuration file at {path} (line {line})")]
    FileParse { path: PathBuf, line: usize },

    #[error("Failed to read resource {resource}: {kind}")]
    ResourceRead { resource: String, kind: ErrorKind },

    #[error("Resource {resource} is not valid UTF-8")]
    ResourceDecode { resource: String },

    #[error("Service registry error: {0}")]
    Registry(String),

    #[error("Module discovery unavailable: {0}")]
    ModuleUnavailable(String),
}
