//! The provider finder.
//!
//! Responsibilities:
//! - Hold the injected lookup capabilities for one contract type.
//! - Provide builder methods to wire sources in.
//! - Wire the standard sources from `FinderSettings`.
//!
//! Does NOT handle:
//! - The search itself (see `resolve.rs`).
//! - Loading settings from the environment (see `settings/`).
//!
//! Invariants:
//! - A source that was not configured is skipped, exactly as if it had found nothing.
//! - The finder holds no mutable state; `find` may be called concurrently.

mod resolve;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use crate::capability::{
    FileConfigLookup, Instantiator, LegacyRegistryLookup, ModuleRegistry, PropertyLookup,
    ServiceRegistry,
};
use crate::settings::FinderSettings;
use crate::sources::{DirectoryModules, EnvPropertyLookup, PropertiesFile, ResourceDirs};

struct ModuleSource<T: ?Sized> {
    registry: Box<dyn ModuleRegistry<T>>,
    module_name: String,
}

/// Resolves implementations of contract `T` from the configured sources.
pub struct ProviderFinder<T: ?Sized> {
    properties: Option<Box<dyn PropertyLookup>>,
    config_file: Option<Box<dyn FileConfigLookup>>,
    services: Option<Box<dyn ServiceRegistry<T>>>,
    modules: Option<ModuleSource<T>>,
    legacy_registry: Option<Box<dyn LegacyRegistryLookup>>,
    instantiator: Arc<dyn Instantiator<T>>,
}

impl<T: ?Sized> ProviderFinder<T> {
    /// Create a finder with no sources; only the default fallback is available.
    pub fn new(instantiator: impl Instantiator<T> + 'static) -> Self {
        Self::with_shared_instantiator(Arc::new(instantiator))
    }

    /// Create a finder whose instantiator is also used elsewhere, e.g. by module discovery.
    pub fn with_shared_instantiator(instantiator: Arc<dyn Instantiator<T>>) -> Self {
        Self {
            properties: None,
            config_file: None,
            services: None,
            modules: None,
            legacy_registry: None,
            instantiator,
        }
    }

    /// Wire the standard sources described by `settings`.
    ///
    /// - properties: the process environment;
    /// - configuration file: `settings.config_location()`;
    /// - legacy registry: `settings.resource_roots`;
    /// - module discovery: `settings.modules_root`, when set, using `instantiator`.
    pub fn from_settings(settings: &FinderSettings, instantiator: Arc<dyn Instantiator<T>>) -> Self
    where
        T: 'static,
    {
        let config_file = match settings.config_location() {
            Ok(location) => PropertiesFile::new(location),
            Err(e) => PropertiesFile::unavailable(e.to_string()),
        };

        let mut finder = Self::with_shared_instantiator(Arc::clone(&instantiator))
            .with_properties(EnvPropertyLookup)
            .with_config_file(config_file)
            .with_legacy_registry(ResourceDirs::new(settings.resource_roots.iter().cloned()));

        if let Some(root) = &settings.modules_root {
            finder = finder.with_modules(
                DirectoryModules::new(root.clone(), instantiator),
                settings.module_name.clone(),
            );
        }
        finder
    }

    /// Set the process-wide property store.
    pub fn with_properties(mut self, properties: impl PropertyLookup + 'static) -> Self {
        self.properties = Some(Box::new(properties));
        self
    }

    /// Set the well-known configuration file.
    pub fn with_config_file(mut self, file: impl FileConfigLookup + 'static) -> Self {
        self.config_file = Some(Box::new(file));
        self
    }

    /// Set the service registry.
    pub fn with_services(mut self, registry: impl ServiceRegistry<T> + 'static) -> Self {
        self.services = Some(Box::new(registry));
        self
    }

    /// Enable module discovery, looking for `module_name` in `registry`.
    pub fn with_modules(
        mut self,
        registry: impl ModuleRegistry<T> + 'static,
        module_name: impl Into<String>,
    ) -> Self {
        self.modules = Some(ModuleSource {
            registry: Box::new(registry),
            module_name: module_name.into(),
        });
        self
    }

    /// Set the deprecated resource registry consulted by legacy identifier.
    pub fn with_legacy_registry(mut self, registry: impl LegacyRegistryLookup + 'static) -> Self {
        self.legacy_registry = Some(Box::new(registry));
        self
    }
}

impl<T: ?Sized> fmt::Debug for ProviderFinder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFinder")
            .field("properties", &self.properties.is_some())
            .field("config_file", &self.config_file.is_some())
            .field("services", &self.services.is_some())
            .field(
                "module",
                &self.modules.as_ref().map(|m| m.module_name.as_str()),
            )
            .field("legacy_registry", &self.legacy_registry.is_some())
            .finish_non_exhaustive()
    }
}
