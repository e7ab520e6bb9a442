//! The resolution algorithm.
//!
//! Responsibilities:
//! - Consult the sources in precedence order and stop at the first provider that instantiates.
//! - Try the canonical identifier before the legacy identifier within each source.
//! - Apply the fallback policy when every source comes up empty.
//!
//! Does NOT handle:
//! - Reading any source (delegated to the injected capabilities).
//!
//! Invariants:
//! - Precedence: property store, configuration file, service registry, module
//!   discovery, legacy resource registry, default.
//! - A source whose provider fails to instantiate is treated as having produced nothing.
//! - Read errors of any source are logged and never fatal.
//! - Only the default fallback can fail the resolution.
//! - `Ok(None)` is returned only when fallback is disabled.

use std::iter;

use super::ProviderFinder;
use crate::capability::Instantiator;
use crate::contract::{ContractId, FactoryRequest, Resolved, Source};
use crate::error::FinderError;
use crate::sources::resource_name;

impl<T: ?Sized> ProviderFinder<T> {
    /// Resolve the provider for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing is configured, fallback is allowed, and no default is named
    ///   (`FinderError::NoProviderFound`).
    /// - The default cannot be instantiated (`FinderError::DefaultInstantiation`).
    pub fn find(&self, request: &FactoryRequest) -> Result<Option<Resolved<T>>, FinderError> {
        let _span = tracing::debug_span!("find_provider", contract = %request.contract()).entered();

        let found = self
            .lookup_properties(request)
            .or_else(|| self.lookup_config_file(request))
            .or_else(|| self.lookup_service_registry(request.contract()))
            .or_else(|| self.lookup_module(request))
            .or_else(|| self.lookup_legacy_registry(request));

        match found {
            Some(resolved) => Ok(Some(resolved)),
            None => self.fallback(request),
        }
    }

    /// Like [`find`](Self::find), without the source diagnostics.
    pub fn find_instance(&self, request: &FactoryRequest) -> Result<Option<Box<T>>, FinderError> {
        Ok(self.find(request)?.map(Resolved::into_instance))
    }

    fn lookup_properties(&self, request: &FactoryRequest) -> Option<Resolved<T>> {
        let properties = self.properties.as_deref()?;
        let name = primary_then_legacy(request, Source::Property, |key| {
            tracing::debug!(key, "Checking property");
            log_found(properties.property(key))
        })?;
        self.instantiate(self.instantiator.as_ref(), request, name, Source::Property)
    }

    fn lookup_config_file(&self, request: &FactoryRequest) -> Option<Resolved<T>> {
        let file = self.config_file.as_deref()?;
        let entries = match file.read() {
            Ok(Some(entries)) => entries,
            Ok(None) => {
                tracing::debug!("No configuration file found");
                return None;
            }
            Err(e) => {
                tracing::error!(
                    contract = %request.contract(),
                    error = %e,
                    "Error reading provider configuration file. Check it is accessible and has correct format"
                );
                return None;
            }
        };

        tracing::debug!(path = %entries.path().display(), "Checking configuration file entries");
        let name = primary_then_legacy(request, Source::ConfigFile, |key| {
            tracing::debug!(key, "Checking configuration file property");
            log_found(
                entries
                    .get(key)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string),
            )
        })?;
        self.instantiate(self.instantiator.as_ref(), request, name, Source::ConfigFile)
    }

    fn lookup_service_registry(&self, contract: &ContractId) -> Option<Resolved<T>> {
        let registry = self.services.as_deref()?;
        tracing::debug!("Checking service registry");

        let first = match registry.providers(contract) {
            Ok(mut providers) => providers.next()?,
            Err(e) => {
                tracing::warn!(contract = %contract, error = %e, "Service registry lookup failed");
                return None;
            }
        };

        match first {
            Ok(instance) => Some(Resolved {
                instance,
                source: Source::ServiceRegistry,
                type_name: None,
            }),
            Err(e) => {
                tracing::warn!(
                    contract = %contract,
                    error = %e,
                    "Registered provider could not be instantiated; trying next source"
                );
                None
            }
        }
    }

    fn lookup_module(&self, request: &FactoryRequest) -> Option<Resolved<T>> {
        let source = self.modules.as_ref()?;
        let module = match source.registry.load_module(&source.module_name) {
            Ok(Some(module)) => module,
            Ok(None) => {
                tracing::debug!("Module discovery not available on this host");
                return None;
            }
            Err(e) => {
                tracing::debug!(module = %source.module_name, error = %e, "Ignoring module discovery failure");
                return None;
            }
        };

        // The first resource that exists decides, even when its content is blank.
        let (resource, content) = request
            .legacy_id()
            .into_iter()
            .chain(iter::once(request.contract().as_str()))
            .map(resource_name)
            .find_map(|resource| {
                tracing::debug!(module = %source.module_name, resource = %resource, "Checking module resource");
                match module.resource(&resource) {
                    Ok(found) => found.map(|content| (resource, content)),
                    Err(e) => {
                        tracing::debug!(resource = %resource, error = %e, "Ignoring unreadable module resource");
                        None
                    }
                }
            })?;

        let name = content.lines().next().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            tracing::debug!(resource = %resource, "Module resource is blank");
            return None;
        }
        tracing::debug!(resource = %resource, value = %name, "  found");
        let name = name.to_string();

        self.instantiate(module.instantiator(), request, name, Source::Module)
    }

    fn lookup_legacy_registry(&self, request: &FactoryRequest) -> Option<Resolved<T>> {
        let legacy_id = request.legacy_id()?;
        let registry = self.legacy_registry.as_deref()?;

        tracing::debug!(resource = %resource_name(legacy_id), "Checking deprecated resource");
        let name = match registry.implementation_name(legacy_id) {
            Ok(found) => log_found(found)?,
            Err(e) => {
                tracing::error!(
                    contract = %request.contract(),
                    legacy_id,
                    error = %e,
                    "Error reading deprecated provider resource"
                );
                return None;
            }
        };

        tracing::warn!(
            deprecated = legacy_id,
            canonical = %request.contract(),
            "Using deprecated resource registry with non-standard identifier {}. Identifier {} should be used instead",
            legacy_id,
            request.contract()
        );
        self.instantiate(self.instantiator.as_ref(), request, name, Source::LegacyRegistry)
    }

    fn fallback(&self, request: &FactoryRequest) -> Result<Option<Resolved<T>>, FinderError> {
        if !request.try_fallback() {
            tracing::debug!("No provider configured and fallback disabled");
            return Ok(None);
        }

        let Some(default_name) = request.default_name() else {
            return Err(FinderError::NoProviderFound {
                contract: request.contract().clone(),
            });
        };

        tracing::debug!(type_name = default_name, "Using default provider");
        let instance = self
            .instantiator
            .instantiate(default_name, Some(default_name))
            .map_err(|source| FinderError::DefaultInstantiation {
                contract: request.contract().clone(),
                type_name: default_name.to_string(),
                source,
            })?;

        Ok(Some(Resolved {
            instance,
            source: Source::Default,
            type_name: Some(default_name.to_string()),
        }))
    }

    fn instantiate(
        &self,
        instantiator: &dyn Instantiator<T>,
        request: &FactoryRequest,
        type_name: String,
        source: Source,
    ) -> Option<Resolved<T>> {
        match instantiator.instantiate(&type_name, request.default_name()) {
            Ok(instance) => {
                tracing::debug!(type_name = %type_name, source = %source, "Resolved provider");
                Some(Resolved {
                    instance,
                    source,
                    type_name: Some(type_name),
                })
            }
            Err(e) => {
                tracing::warn!(
                    contract = %request.contract(),
                    source = %source,
                    error = %e,
                    "Configured provider could not be instantiated; trying next source"
                );
                None
            }
        }
    }
}

/// Look up the canonical key, then the legacy key, warning when the legacy key is used.
fn primary_then_legacy<F>(request: &FactoryRequest, source: Source, mut get: F) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    if let Some(value) = get(request.contract().as_str()) {
        return Some(value);
    }

    let legacy_id = request.legacy_id()?;
    let value = get(legacy_id)?;
    tracing::warn!(
        deprecated = legacy_id,
        canonical = %request.contract(),
        source = %source,
        "Using non-standard property {}. Property {} should be used instead",
        legacy_id,
        request.contract()
    );
    Some(value)
}

fn log_found(value: Option<String>) -> Option<String> {
    match &value {
        Some(found) => tracing::debug!(value = %found, "  found"),
        None => tracing::debug!("  not found"),
    }
    value
}
