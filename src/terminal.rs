//! 端末への描画
//!
//! 地図マーカーと一覧項目を行として保持し、まとめて文字列化する。

use scoutly_common::{ListItem, ListPanel, MarkerLayer, MarkerSpec};

/// 地図マーカーを座標付きの行として保持
#[derive(Debug, Clone, Default)]
pub struct TerminalMap {
    markers: Vec<MarkerSpec>,
}

impl TerminalMap {
    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn to_text(&self) -> String {
        self.markers
            .iter()
            .map(|m| {
                format!(
                    "📍 ({}, {}) {} / {}{}",
                    format_coordinate(m.lat),
                    format_coordinate(m.lng),
                    m.popup.name,
                    m.popup.address,
                    if m.popup.notes.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", m.popup.notes)
                    }
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MarkerLayer for TerminalMap {
    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, marker: MarkerSpec) {
        self.markers.push(marker);
    }
}

/// 一覧項目を保持
#[derive(Debug, Clone, Default)]
pub struct TerminalList {
    items: Vec<ListItem>,
}

impl TerminalList {
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn to_text(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                format!(
                    "{} #{} {}\n    {}",
                    if item.favorite { "★" } else { "☆" },
                    item.id,
                    item.name,
                    item.subtitle()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ListPanel for TerminalList {
    fn clear_items(&mut self) {
        self.items.clear();
    }

    fn append_item(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

fn format_coordinate(value: f64) -> String {
    if value.is_finite() {
        format!("{:.4}", value)
    } else {
        "NaN".to_string()
    }
}
