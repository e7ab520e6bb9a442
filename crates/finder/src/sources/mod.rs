//! Concrete configuration sources.
//!
//! Responsibilities:
//! - Implement the lookup capabilities over the environment, the file system
//!   and in-memory registries.
//!
//! Does NOT handle:
//! - Precedence between sources (see `finder/resolve.rs`).
//! - Deciding which paths to use (see `settings/`).
//!
//! Invariants:
//! - Sources never write to disk or mutate the process environment.

mod env;
mod file;
mod module;
mod path;
mod registry;
mod resources;

pub use env::{EnvPropertyLookup, StaticProperties, env_var_or_none};
pub use file::PropertiesFile;
pub use module::DirectoryModules;
pub use path::ConfigFileLocation;
pub use registry::ProviderRegistry;
pub use resources::{ResourceDirs, resource_name};
