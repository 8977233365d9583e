//! JavaScript Bridge バインディング
//!
//! 地図描画（Leaflet + markercluster）とファイルダウンロードを
//! JavaScript側に委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/map-bridge.js")]
extern "C" {
    /// 地図を初期化してクラスタレイヤーを追加
    #[wasm_bindgen(js_name = "initMap")]
    pub fn init_map_js(
        element_id: &str,
        lat: f64,
        lng: f64,
        zoom: u8,
        tile_url: &str,
        attribution: &str,
    );

    /// クラスタレイヤー上のマーカーを全削除
    #[wasm_bindgen(js_name = "clearMarkers")]
    pub fn clear_markers_js();

    /// マーカーを追加してポップアップを紐付け
    #[wasm_bindgen(js_name = "addMarker")]
    pub fn add_marker_js(lat: f64, lng: f64, popup_html: &str);
}

#[wasm_bindgen(module = "/js/download.js")]
extern "C" {
    /// テキストをファイルとしてダウンロード
    #[wasm_bindgen(js_name = "downloadText")]
    pub fn download_text_js(text: &str, filename: &str, mime_type: &str);
}
