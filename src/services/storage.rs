use crate::config::Config;
use crate::models::error::AppError;
use gloo_storage::Storage;
use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value storage scoped to the page's origin.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// The browser's `localStorage`. Only obtainable through [`LocalStorageStore::new`].
///
/// ```compile_fail
/// let store = spot_price_dashboard::services::storage::LocalStorageStore { _checked: () };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    _checked: (),
}

impl LocalStorageStore {
    /// Fails outside a browser, where there is no `localStorage` to mirror to.
    pub fn new() -> Result<Self, AppError> {
        let available = cfg!(target_arch = "wasm32")
            && web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .is_some();

        if available {
            Ok(Self { _checked: () })
        } else {
            Err(AppError::EnvironmentUnavailable(
                "localStorage is not available".to_string(),
            ))
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|e| AppError::StorageError(format!("Failed to read '{key}': {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AppError::StorageError(format!("Failed to write '{key}': {e:?}")))
    }
}

/// In-memory store for headless contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A named value mirrored to a `KeyValueStore` as JSON.
///
/// The stored value wins over the default at construction. Each write goes to
/// the store before the in-memory copy. Two settings sharing a key are not
/// kept in sync.
pub struct PersistedSetting<T> {
    store: Rc<dyn KeyValueStore>,
    key: String,
    value: T,
}

impl<T> PersistedSetting<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = load(store.as_ref(), &key).unwrap_or(default);

        Self { store, key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Writes `value` through to the store, then keeps it in memory.
    pub fn set(&mut self, value: T) -> Result<(), AppError> {
        let serialized = serde_json::to_string(&value)
            .map_err(|e| AppError::StorageError(format!("Failed to serialize '{}': {e}", self.key)))?;

        self.store.set(&self.key, &serialized)?;
        self.value = value;
        Ok(())
    }
}

fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::debug!(key, error = %e, "setting not readable, using default");
            return None;
        }
    };

    serde_json::from_str(&raw)
        .inspect_err(|e| tracing::warn!(key, error = %e, "stored setting unparseable, using default"))
        .ok()
}

/// The user's settings, all backed by the same store.
pub struct LocalSettings {
    pub show_only_after_now: PersistedSetting<bool>,
}

impl LocalSettings {
    pub fn load(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            show_only_after_now: PersistedSetting::new(store, Config::SHOW_ONLY_AFTER_NOW_KEY, false),
        }
    }
}
