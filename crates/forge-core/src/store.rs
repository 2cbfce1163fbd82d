//! Key-value storage for captured attribution.
//!
//! The browser build persists to `window.localStorage`; tests and the CLI
//! use [`MemoryStore`]. Both sit behind [`AttributionStore`] so capture and
//! link merging never touch a concrete backend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ForgeResult;
use crate::tracking::{TrackedParam, TrackingKey};

/// A string key-value store scoped to one client device.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability.
pub trait AttributionStore {
    /// Read the value stored under `key`, `None` if nothing is stored.
    fn get(&self, key: &str) -> ForgeResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> ForgeResult<()>;

    /// Read a tracking value, treating empty strings as absent.
    fn tracked(&self, key: TrackingKey) -> ForgeResult<Option<String>> {
        Ok(self.get(key.as_str())?.filter(|v| !v.is_empty()))
    }
}

impl<S: AttributionStore + ?Sized> AttributionStore for &S {
    fn get(&self, key: &str) -> ForgeResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ForgeResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with tracking values.
    pub fn with_params<I>(params: I) -> Self
    where
        I: IntoIterator<Item = TrackedParam>,
    {
        let entries = params
            .into_iter()
            .map(|p| (p.key.as_str().to_string(), p.value))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of every stored entry.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().clone()
    }
}

impl AttributionStore for MemoryStore {
    fn get(&self, key: &str) -> ForgeResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ForgeResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
