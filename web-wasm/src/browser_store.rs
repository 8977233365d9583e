//! localStorage によるキーバリューストア

use scoutly_common::{Error, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// ブラウザの localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| Error::Storage("window unavailable".into()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| Error::Storage("localStorage unavailable".into()))
}

fn js_error(e: JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use scoutly_common::{FavoriteSet, FAVORITES_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_favorites_round_trip_through_local_storage() {
        let mut store = BrowserStore;
        store.set(FAVORITES_KEY, "[]").expect("reset failed");

        let mut favorites = FavoriteSet::load(BrowserStore);
        favorites.toggle(12).expect("toggle failed");

        let reloaded = FavoriteSet::load(BrowserStore);
        assert!(reloaded.is_favorite(12));
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[12]"));
    }
}
