//! Process-wide property stores.
//!
//! Responsibilities:
//! - Read provider names from environment variables.
//! - Provide an in-memory property store for embedders that carry their own properties.
//!
//! Does NOT handle:
//! - Primary/legacy key ordering (see `finder/resolve.rs`).
//! - Loading `.env` files (see `settings/builder.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::BTreeMap;

use crate::capability::PropertyLookup;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| non_blank(&s))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Property lookup backed by the process environment.
///
/// Keys are used verbatim, so `com.example.MessageFactory` is read from the
/// environment variable of exactly that name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPropertyLookup;

impl PropertyLookup for EnvPropertyLookup {
    fn property(&self, key: &str) -> Option<String> {
        env_var_or_none(key)
    }
}

/// Fixed in-memory property store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProperties {
    values: BTreeMap<String, String>,
}

impl StaticProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyLookup for StaticProperties {
    fn property(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(|v| non_blank(v))
    }
}
