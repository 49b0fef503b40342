//! `window.localStorage` backend for [`AppStore`](agri_store::AppStore).

use agri_store::ProfileStorage;
use wasm_bindgen::JsValue;

/// Browser local storage. Every call looks the storage object up again, so
/// the value is free to copy around.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> anyhow::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window object"))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| anyhow::anyhow!("localStorage is not available"))
    }
}

impl ProfileStorage for LocalStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow::anyhow!(message),
        None => anyhow::anyhow!("{:?}", value),
    }
}
