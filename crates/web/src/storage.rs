//! Browser `localStorage` slot backend.

use storefront::storage::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// Slots stored in `window.localStorage`.
///
/// The storage object is looked up on every call, so the handle itself holds
/// no JS references and can live inside reactive state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("Window is unavailable".to_string()))?;

        window
            .local_storage()
            .map_err(|error| {
                StorageError::Unavailable(js_value_message(error, "localStorage access was denied"))
            })?
            .ok_or_else(|| StorageError::Unavailable("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|error| {
            StorageError::Unavailable(js_value_message(error, "localStorage read failed"))
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|error| StorageError::Rejected {
                key: key.to_string(),
                reason: js_value_message(error, "localStorage write failed"),
            })
    }
}

fn js_value_message(error: JsValue, fallback: &str) -> String {
    error.as_string().unwrap_or_else(|| fallback.to_string())
}
