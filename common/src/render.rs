//! 地図マーカーと一覧の同期描画
//!
//! 描画は毎回全消去からの再構築。`render` 完了後、マーカー列と一覧項目列は
//! 入力レコード列と同じ順序で1対1に対応し、同じお気に入り状態を反映する。

use crate::favorites::{FavoriteSet, KeyValueStore};
use crate::types::{BusinessId, BusinessRecord};

pub const FAVORITE_LABEL: &str = "★ Remove Favorite";
pub const NOT_FAVORITE_LABEL: &str = "☆ Add Favorite";

/// ポップアップの内容
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub name: String,
    pub address: String,
    pub notes: String,
}

impl Popup {
    /// `<b>名称</b><br>住所<br><i>メモ</i>` 形式のHTML（各値はエスケープ済み）
    pub fn to_html(&self) -> String {
        format!(
            "<b>{}</b><br>{}<br><i>{}</i>",
            escape_html(&self.name),
            escape_html(&self.address),
            escape_html(&self.notes)
        )
    }
}

/// 地図に置くマーカー
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: BusinessId,
    pub lat: f64,
    pub lng: f64,
    pub popup: Popup,
}

impl From<&BusinessRecord> for MarkerSpec {
    fn from(record: &BusinessRecord) -> Self {
        Self {
            id: record.id,
            lat: record.lat,
            lng: record.lng,
            popup: Popup {
                name: record.name.clone(),
                address: record.address.clone(),
                notes: record.notes.clone(),
            },
        }
    }
}

/// 一覧の1項目
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem {
    pub id: BusinessId,
    pub name: String,
    pub category: String,
    pub address: String,
    pub favorite: bool,
}

impl ListItem {
    pub fn from_record(record: &BusinessRecord, favorite: bool) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            category: record.category.clone(),
            address: record.address.clone(),
            favorite,
        }
    }

    /// お気に入りボタンの表示
    pub fn toggle_label(&self) -> &'static str {
        if self.favorite {
            FAVORITE_LABEL
        } else {
            NOT_FAVORITE_LABEL
        }
    }

    /// 「カテゴリ — 住所」
    pub fn subtitle(&self) -> String {
        format!("{} — {}", self.category, self.address)
    }
}

/// 地図側のマーカーレイヤー
pub trait MarkerLayer {
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: MarkerSpec);
}

/// 一覧パネル
pub trait ListPanel {
    fn clear_items(&mut self);
    fn append_item(&mut self, item: ListItem);
}

/// マーカーレイヤーと一覧パネルを同期させる描画役
#[derive(Debug)]
pub struct RenderCoordinator<M, L> {
    markers: M,
    list: L,
}

impl<M: MarkerLayer, L: ListPanel> RenderCoordinator<M, L> {
    pub fn new(markers: M, list: L) -> Self {
        Self { markers, list }
    }

    /// 全消去してからレコード順にマーカーと一覧項目を作り直す
    pub fn render<K: KeyValueStore>(&mut self, records: &[BusinessRecord], favorites: &FavoriteSet<K>) {
        self.markers.clear_markers();
        self.list.clear_items();

        for record in records {
            self.markers.add_marker(MarkerSpec::from(record));
            self.list
                .append_item(ListItem::from_record(record, favorites.is_favorite(record.id)));
        }
        tracing::debug!(count = records.len(), "rendered");
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn list(&self) -> &L {
        &self.list
    }
}

/// 描画内容をそのまま保持するだけのレイヤー
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingLayer {
    pub markers: Vec<MarkerSpec>,
    pub clears: usize,
}

#[cfg(test)]
impl MarkerLayer for RecordingLayer {
    fn clear_markers(&mut self) {
        self.markers.clear();
        self.clears += 1;
    }

    fn add_marker(&mut self, marker: MarkerSpec) {
        self.markers.push(marker);
    }
}

/// 描画内容をそのまま保持するだけの一覧
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingList {
    pub items: Vec<ListItem>,
    pub clears: usize,
}

#[cfg(test)]
impl ListPanel for RecordingList {
    fn clear_items(&mut self) {
        self.items.clear();
        self.clears += 1;
    }

    fn append_item(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
