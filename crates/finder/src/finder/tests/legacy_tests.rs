//! Legacy resource registry tests.

use super::{CONTRACT, Counting, LEGACY_ID, MemoryFile, MemoryResources, catalog};
use crate::contract::{FactoryRequest, Source};
use crate::finder::ProviderFinder;
use crate::sources::StaticProperties;
use crate::test_util::capture_warn_messages;

#[test]
fn test_legacy_registry_alone_resolves_with_one_warning() {
    let finder = ProviderFinder::new(catalog())
        .with_properties(StaticProperties::new())
        .with_legacy_registry(MemoryResources::with(LEGACY_ID, "com.example.Impl"));
    let request = FactoryRequest::new(CONTRACT).with_legacy_id(LEGACY_ID);

    let (resolved, warnings) = capture_warn_messages(|| finder.find(&request));
    let resolved = resolved.unwrap().unwrap();

    assert_eq!(resolved.instance.kind(), "com.example.Impl");
    assert_eq!(resolved.source, Source::LegacyRegistry);
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains(LEGACY_ID));
    assert!(warnings[0].contains(CONTRACT));
}

#[test]
fn test_legacy_registry_keyed_only_by_legacy_id() {
    let (legacy, calls) = Counting::new(MemoryResources::with(CONTRACT, "com.example.Impl"));
    let finder = ProviderFinder::new(catalog()).with_legacy_registry(legacy);

    let without_legacy = FactoryRequest::new(CONTRACT).without_fallback();
    assert!(finder.find(&without_legacy).unwrap().is_none());
    assert_eq!(calls.count(), 0, "registry must not be consulted by contract id");

    let with_legacy = without_legacy.with_legacy_id(LEGACY_ID);
    assert!(finder.find(&with_legacy).unwrap().is_none());
    assert_eq!(calls.count(), 1);
}

#[test]
fn test_blank_legacy_resource_yields_nothing() {
    let finder = ProviderFinder::new(catalog())
        .with_legacy_registry(MemoryResources::with(LEGACY_ID, "   \ncom.example.Impl"));
    let request = FactoryRequest::new(CONTRACT)
        .with_legacy_id(LEGACY_ID)
        .without_fallback();

    let (resolved, warnings) = capture_warn_messages(|| finder.find(&request));
    assert!(resolved.unwrap().is_none());
    assert!(warnings.is_empty());
}

#[test]
fn test_uninstantiable_legacy_type_falls_back_to_default() {
    let finder = ProviderFinder::new(catalog())
        .with_legacy_registry(MemoryResources::with(LEGACY_ID, "com.example.Broken"));
    let request = FactoryRequest::new(CONTRACT)
        .with_legacy_id(LEGACY_ID)
        .with_default("com.example.TypeC");

    let resolved = finder.find(&request).unwrap().unwrap();
    assert_eq!(resolved.source, Source::Default);
    assert_eq!(resolved.instance.kind(), "com.example.TypeC");
}

#[test]
fn test_blank_primary_key_in_config_file_uses_legacy_key() {
    let finder = ProviderFinder::new(catalog()).with_config_file(MemoryFile::with(&[
        (CONTRACT, "   "),
        (LEGACY_ID, "com.example.TypeB"),
    ]));
    let request = FactoryRequest::new(CONTRACT)
        .with_legacy_id(LEGACY_ID)
        .without_fallback();

    let (resolved, warnings) = capture_warn_messages(|| finder.find(&request));
    let resolved = resolved.unwrap().unwrap();

    assert_eq!(resolved.source, Source::ConfigFile);
    assert_eq!(resolved.instance.kind(), "com.example.TypeB");
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("non-standard property"));
}
