//! 既定値
//!
//! 地図の初期表示と初期データの取得先。Web版はこのまま使い、
//! CLIは設定ファイルで上書きできる。

use serde::{Deserialize, Serialize};

/// 初期データの取得先
pub const DATA_URL: &str = "places.json";

/// 地図表示の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        // マニラ中心
        Self {
            center_lat: 14.5995,
            center_lng: 120.9842,
            zoom: 12,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap contributors".into(),
        }
    }
}
