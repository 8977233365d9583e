//! 描画先の実装
//!
//! - LeafletLayer: JS Bridge経由でクラスタレイヤーにマーカーを置く
//! - SignalListPanel: 一覧項目をLeptosのシグナルに書き込み、コンポーネント側で描画する

use leptos::prelude::*;
use scoutly_common::{ListItem, ListPanel, MarkerLayer, MarkerSpec};
use crate::js_bindings::{add_marker_js, clear_markers_js};

/// Leaflet地図のマーカーレイヤー
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafletLayer;

impl MarkerLayer for LeafletLayer {
    fn clear_markers(&mut self) {
        clear_markers_js();
    }

    fn add_marker(&mut self, marker: MarkerSpec) {
        // Leafletは非数値の座標で例外を投げるため置かない
        if !(marker.lat.is_finite() && marker.lng.is_finite()) {
            gloo::console::warn!(format!(
                "marker skipped for #{} ({}): invalid coordinates",
                marker.id, marker.popup.name
            ));
            return;
        }
        add_marker_js(marker.lat, marker.lng, &marker.popup.to_html());
    }
}

/// シグナルに書き込む一覧パネル
#[derive(Debug, Clone, Copy)]
pub struct SignalListPanel {
    items: RwSignal<Vec<ListItem>>,
}

impl SignalListPanel {
    pub fn new(items: RwSignal<Vec<ListItem>>) -> Self {
        Self { items }
    }
}

impl ListPanel for SignalListPanel {
    fn clear_items(&mut self) {
        self.items.set(Vec::new());
    }

    fn append_item(&mut self, item: ListItem) {
        self.items.update(|items| items.push(item));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use scoutly_common::{FavoriteSet, MemoryStore, NewBusiness, RenderCoordinator};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// マーカーは数えるだけ
    #[derive(Default)]
    struct CountingLayer(usize);

    impl MarkerLayer for CountingLayer {
        fn clear_markers(&mut self) {
            self.0 = 0;
        }

        fn add_marker(&mut self, _marker: MarkerSpec) {
            self.0 += 1;
        }
    }

    #[wasm_bindgen_test]
    fn wasm_signal_list_panel_mirrors_render() {
        let owner = Owner::new();
        owner.set();

        let items = RwSignal::new(Vec::<ListItem>::new());
        let mut coordinator = RenderCoordinator::new(CountingLayer::default(), SignalListPanel::new(items));
        let mut favorites = FavoriteSet::load(MemoryStore::new());
        favorites.toggle(2).unwrap();

        let records: Vec<_> = (1..=3)
            .map(|id| NewBusiness { name: format!("Shop {id}"), ..Default::default() }.with_id(id))
            .collect();
        coordinator.render(&records, &favorites);

        let rendered = items.get_untracked();
        assert_eq!(rendered.len(), 3);
        assert_eq!(coordinator.markers().0, 3);
        assert_eq!(
            rendered.iter().map(|i| i.favorite).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }
}
