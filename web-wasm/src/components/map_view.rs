//! 地図コンポーネント
//!
//! Leafletが描画する器だけを用意する。初期化はマウント後にApp側で行う。

use leptos::prelude::*;

/// 地図を描画する要素のID
pub const MAP_ELEMENT_ID: &str = "map";

#[component]
pub fn MapView() -> impl IntoView {
    view! { <div id=MAP_ELEMENT_ID class="map"></div> }
}
