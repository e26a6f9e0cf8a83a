/// chrome.storage.sync access for `Settings`
use log::debug;
use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::settings::{Settings, OPEN_IN_NEW_TAB_KEY};

// Import JS bridge functions
#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getSyncStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setSyncStorage(items: JsValue) -> Result<(), JsValue>;
}

pub async fn load_settings() -> Result<Settings, Error> {
    let keys = serde_wasm_bindgen::to_value(&[OPEN_IN_NEW_TAB_KEY])?;
    let items = getSyncStorage(keys)
        .await
        .map_err(|e| Error::Storage(format!("Failed to get storage: {:?}", e)))?;

    if items.is_null() || items.is_undefined() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_wasm_bindgen::from_value(items)?;
    debug!("Loaded {:?}", settings);
    Ok(settings)
}

pub async fn save_settings(settings: &Settings) -> Result<(), Error> {
    let items = serde_wasm_bindgen::to_value(settings)?;

    setSyncStorage(items)
        .await
        .map_err(|e| Error::Storage(format!("Failed to save storage: {:?}", e)))?;

    debug!("Saved {:?}", settings);
    Ok(())
}
