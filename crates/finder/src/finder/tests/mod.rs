//! Tests for the provider finder.
//!
//! Responsibilities:
//! - Test source precedence and short-circuiting.
//! - Test canonical-before-legacy lookups and deprecation warnings.
//! - Test the fallback policy.
//!
//! Invariants:
//! - Sources are in-memory fixtures wrapped in call counters; no test touches
//!   the real environment or file system.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::capability::{
    ConfigEntries, FileConfigLookup, Instantiator, LegacyRegistryLookup, ModuleHandle,
    ModuleRegistry, PropertyLookup, ProviderIter, ServiceRegistry,
};
use crate::contract::ContractId;
use crate::error::LookupError;
use crate::instantiate::TypeCatalog;
use crate::sources::ProviderRegistry;

pub mod legacy_tests;

pub const CONTRACT: &str = "com.example.MessageFactory";
pub const LEGACY_ID: &str = "OldFactory";

/// Contract used throughout the finder tests.
pub trait MessageFactory: Send + Sync {
    fn kind(&self) -> &str;
}

struct Named(String);

impl MessageFactory for Named {
    fn kind(&self) -> &str {
        &self.0
    }
}

pub fn named(name: &str) -> Box<dyn MessageFactory> {
    Box::new(Named(name.to_string()))
}

/// Catalog knowing `com.example.Type{A,B,C}`, `com.example.Impl`,
/// an abstract type and a type whose constructor fails.
pub fn catalog() -> TypeCatalog<dyn MessageFactory> {
    let mut catalog = TypeCatalog::new();
    for name in [
        "com.example.TypeA",
        "com.example.TypeB",
        "com.example.TypeC",
        "com.example.Impl",
    ] {
        catalog = catalog.with_type(name, move || Ok(named(name)));
    }
    catalog
        .with_abstract("com.example.AbstractFactory")
        .with_type("com.example.Broken", || Err("constructor failed".to_string()))
}

/// Shared call counter.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Wraps a capability and counts how often it is consulted.
pub struct Counting<S> {
    inner: S,
    calls: Calls,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> (Self, Calls) {
        let calls = Calls::default();
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl<S: PropertyLookup> PropertyLookup for Counting<S> {
    fn property(&self, key: &str) -> Option<String> {
        self.calls.hit();
        self.inner.property(key)
    }
}

impl<S: FileConfigLookup> FileConfigLookup for Counting<S> {
    fn read(&self) -> Result<Option<ConfigEntries>, LookupError> {
        self.calls.hit();
        self.inner.read()
    }
}

impl<T: ?Sized, S: ServiceRegistry<T>> ServiceRegistry<T> for Counting<S> {
    fn providers(&self, contract: &ContractId) -> Result<ProviderIter<'_, T>, LookupError> {
        self.calls.hit();
        self.inner.providers(contract)
    }
}

impl<T: ?Sized, S: ModuleRegistry<T>> ModuleRegistry<T> for Counting<S> {
    fn load_module(
        &self,
        module: &str,
    ) -> Result<Option<Box<dyn ModuleHandle<T> + '_>>, LookupError> {
        self.calls.hit();
        self.inner.load_module(module)
    }
}

impl<S: LegacyRegistryLookup> LegacyRegistryLookup for Counting<S> {
    fn implementation_name(&self, legacy_id: &str) -> Result<Option<String>, LookupError> {
        self.calls.hit();
        self.inner.implementation_name(legacy_id)
    }
}

/// Configuration file fixture.
pub enum MemoryFile {
    Missing,
    Unreadable,
    Entries(ConfigEntries),
}

impl MemoryFile {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let mut file = ConfigEntries::new("/fixture/conf/factories.properties");
        for (key, value) in entries {
            file.insert(*key, *value);
        }
        MemoryFile::Entries(file)
    }
}

impl FileConfigLookup for MemoryFile {
    fn read(&self) -> Result<Option<ConfigEntries>, LookupError> {
        match self {
            MemoryFile::Missing => Ok(None),
            MemoryFile::Unreadable => Err(LookupError::FileParse {
                path: "/fixture/conf/factories.properties".into(),
                line: 3,
            }),
            MemoryFile::Entries(entries) => Ok(Some(entries.clone())),
        }
    }
}

/// Legacy resource registry fixture.
#[derive(Default)]
pub struct MemoryResources(BTreeMap<String, String>);

impl MemoryResources {
    pub fn with(legacy_id: &str, content: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(legacy_id.to_string(), content.to_string());
        Self(map)
    }
}

impl LegacyRegistryLookup for MemoryResources {
    fn implementation_name(&self, legacy_id: &str) -> Result<Option<String>, LookupError> {
        Ok(self
            .0
            .get(legacy_id)
            .and_then(|content| content.lines().next())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string))
    }
}

/// Module discovery fixture with its own catalog.
pub enum MemoryModule {
    Absent,
    Broken,
    Present {
        resources: BTreeMap<String, String>,
        catalog: TypeCatalog<dyn MessageFactory>,
    },
}

impl MemoryModule {
    /// A module holding `resources` whose catalog knows each resource's type name.
    pub fn with(resources: &[(&str, &str)]) -> Self {
        let mut catalog = TypeCatalog::new();
        let mut map = BTreeMap::new();
        for (resource, type_name) in resources {
            if !type_name.trim().is_empty() {
                let name = type_name.to_string();
                catalog = catalog.with_type(*type_name, move || Ok(named(&name)));
            }
            map.insert(resource.to_string(), type_name.to_string());
        }
        MemoryModule::Present {
            resources: map,
            catalog,
        }
    }
}

struct MemoryModuleHandle<'a> {
    resources: &'a BTreeMap<String, String>,
    catalog: &'a TypeCatalog<dyn MessageFactory>,
}

impl ModuleHandle<dyn MessageFactory> for MemoryModuleHandle<'_> {
    fn resource(&self, name: &str) -> Result<Option<String>, LookupError> {
        Ok(self.resources.get(name).cloned())
    }

    fn instantiator(&self) -> &dyn Instantiator<dyn MessageFactory> {
        self.catalog
    }
}

impl ModuleRegistry<dyn MessageFactory> for MemoryModule {
    fn load_module(
        &self,
        _module: &str,
    ) -> Result<Option<Box<dyn ModuleHandle<dyn MessageFactory> + '_>>, LookupError> {
        match self {
            MemoryModule::Absent => Ok(None),
            MemoryModule::Broken => Err(LookupError::ModuleUnavailable("module failed to load".to_string())),
            MemoryModule::Present { resources, catalog } => {
                Ok(Some(Box::new(MemoryModuleHandle { resources, catalog })))
            }
        }
    }
}

/// Service registry holding a single provider named `name`.
pub fn registry_with(name: &'static str) -> ProviderRegistry<dyn MessageFactory> {
    ProviderRegistry::new().with_provider(CONTRACT, name, move || Ok(named(name)))
}

/// Service registry whose discovery mechanism itself fails.
pub struct OfflineRegistry;

impl ServiceRegistry<dyn MessageFactory> for OfflineRegistry {
    fn providers(
        &self,
        _contract: &ContractId,
    ) -> Result<ProviderIter<'_, dyn MessageFactory>, LookupError> {
        Err(LookupError::Registry("registry offline".to_string()))
    }
}
