//! Key-value slots the review store persists into.
use crate::error::StorageError;
use leptos::logging::warn;
use std::collections::HashMap;

/// A string-keyed slot holding whole serialized values.
/// Writes overwrite the previous value entirely.
pub trait KeyValueSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".into())),
            Err(err) => Err(StorageError::Unavailable(format!("{:?}", err))),
        }
    }
}

impl KeyValueSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|err| {
            // Usually QuotaExceededError
            warn!("[STORAGE] localStorage rejected write to '{}'", key);
            StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", err),
            }
        })
    }
}

/// In-memory slot, for running the widget logic outside a browser.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl MemorySlot {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
