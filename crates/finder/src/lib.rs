//! Runtime resolution of factory implementations.
//!
//! A library names an abstract contract; the embedding application, the
//! platform or a packaged default supplies the implementation. This crate
//! finds that implementation by consulting, in order: a process-wide property
//! store, a well-known configuration file, a service registry, an optional
//! module discovery mechanism, a deprecated resource registry, and finally the
//! built-in default.
//!
//! ```rust,ignore
//! use factory_finder::{FactoryRequest, ProviderFinder, StaticProperties, TypeCatalog};
//!
//! let finder = ProviderFinder::new(catalog).with_properties(StaticProperties::new());
//! let factory = finder
//!     .find_instance(&FactoryRequest::new("com.example.MessageFactory").with_default("com.example.Default"))?
//!     .expect("fallback is enabled");
//! ```

pub mod capability;
pub mod constants;
mod contract;
mod error;
mod finder;
mod instantiate;
pub mod settings;
pub mod sources;

pub use capability::{
    ConfigEntries, FileConfigLookup, Instantiator, LegacyRegistryLookup, ModuleHandle,
    ModuleRegistry, PropertyLookup, ProviderIter, ServiceRegistry,
};
pub use contract::{ContractId, FactoryRequest, Resolved, Source};
pub use error::{FinderError, InstantiationError, LookupError};
pub use finder::ProviderFinder;
pub use instantiate::{NameOnly, ProviderName, TypeCatalog, is_type_path};
pub use settings::{FinderSettings, SettingsError, SettingsLoader};
pub use sources::{
    ConfigFileLocation, DirectoryModules, EnvPropertyLookup, PropertiesFile, ProviderRegistry,
    ResourceDirs, StaticProperties, env_var_or_none, resource_name,
};
