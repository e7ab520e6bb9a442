//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map resolution failures to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 4 means no provider could be selected, whether or not fallback was allowed.

use factory_finder::{ContractId, FinderError};
use thiserror::Error;

/// Structured exit codes for factory-finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - invalid settings, unusable default, or any other failure.
    GeneralError = 1,

    /// No provider found - nothing configured and no usable fallback.
    ///
    /// Scripts should configure a provider or supply a default.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Nothing was configured for a contract and fallback was disabled.
#[derive(Error, Debug)]
#[error("No provider configured for {contract}")]
pub struct NotConfigured {
    pub contract: ContractId,
}

impl From<&FinderError> for ExitCode {
    fn from(err: &FinderError) -> Self {
        match err {
            FinderError::NoProviderFound { .. } => ExitCode::NotFound,
            FinderError::DefaultInstantiation { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no resolution failure is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(finder_err) = cause.downcast_ref::<FinderError>() {
                return ExitCode::from(finder_err);
            }
            if cause.downcast_ref::<NotConfigured>().is_some() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
