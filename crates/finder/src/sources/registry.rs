//! In-memory service registry.
//!
//! Responsibilities:
//! - Record named provider constructors per contract, in registration order.
//! - Enumerate ready-made instances for a contract.
//!
//! Does NOT handle:
//! - Choosing among providers (the finder takes the first one).

use std::collections::HashMap;
use std::fmt;

use crate::capability::{ProviderIter, ServiceRegistry};
use crate::contract::ContractId;
use crate::error::{InstantiationError, LookupError};

type Constructor<T> = Box<dyn Fn() -> Result<Box<T>, String> + Send + Sync>;

struct ProviderEntry<T: ?Sized> {
    name: String,
    factory: Constructor<T>,
}

/// Service registry populated by the embedding application.
pub struct ProviderRegistry<T: ?Sized> {
    providers: HashMap<ContractId, Vec<ProviderEntry<T>>>,
}

impl<T: ?Sized> Default for ProviderRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> ProviderRegistry<T> {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider for `contract`. Earlier registrations are enumerated first.
    pub fn register<F>(&mut self, contract: impl Into<ContractId>, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<T>, String> + Send + Sync + 'static,
    {
        self.providers
            .entry(contract.into())
            .or_default()
            .push(ProviderEntry {
                name: name.into(),
                factory: Box::new(factory),
            });
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_provider<F>(mut self, contract: impl Into<ContractId>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<T>, String> + Send + Sync + 'static,
    {
        self.register(contract, name, factory);
        self
    }

    /// Names of the providers registered for `contract`, in enumeration order.
    pub fn provider_names(&self, contract: &ContractId) -> Vec<&str> {
        self.providers
            .get(contract)
            .map(|entries| entries.iter().map(|e| e.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl<T: ?Sized> ServiceRegistry<T> for ProviderRegistry<T> {
    fn providers(&self, contract: &ContractId) -> Result<ProviderIter<'_, T>, LookupError> {
        let entries = self.providers.get(contract).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Box::new(entries.iter().map(|entry| {
            (entry.factory)().map_err(|message| InstantiationError::Construction {
                type_name: entry.name.clone(),
                message,
            })
        })))
    }
}

impl<T: ?Sized> fmt::Debug for ProviderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (contract, entries) in &self.providers {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            map.entry(contract, &names);
        }
        map.finish()
    }
}
