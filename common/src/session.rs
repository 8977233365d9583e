//! ディレクトリ画面の状態
//!
//! ストア・お気に入り・検索クエリ・描画役をまとめて所有する。
//! 状態を変える操作はすべて最後に地図と一覧を全面再描画する。

use crate::editor::{self, RecordForm};
use crate::error::Result;
use crate::favorites::{FavoriteSet, KeyValueStore};
use crate::filter;
use crate::gateway;
use crate::render::{ListPanel, MarkerLayer, RenderCoordinator};
use crate::store::BusinessStore;
use crate::types::{BusinessId, BusinessRecord};

/// 1画面分のセッション
pub struct DirectorySession<K: KeyValueStore, M: MarkerLayer, L: ListPanel> {
    store: BusinessStore,
    favorites: FavoriteSet<K>,
    query: String,
    coordinator: RenderCoordinator<M, L>,
}

impl<K: KeyValueStore, M: MarkerLayer, L: ListPanel> DirectorySession<K, M, L> {
    /// お気に入りを読み込んで空のセッションを作る（描画はまだ行わない）
    pub fn new(favorites_backend: K, markers: M, list: L) -> Self {
        Self::with_favorites(FavoriteSet::load(favorites_backend), markers, list)
    }

    pub fn with_favorites(favorites: FavoriteSet<K>, markers: M, list: L) -> Self {
        Self {
            store: BusinessStore::new(),
            favorites,
            query: String::new(),
            coordinator: RenderCoordinator::new(markers, list),
        }
    }

    /// 初期データを読み込んで全件表示
    pub fn load_initial(&mut self, records: Vec<BusinessRecord>) -> Result<()> {
        self.store.load(records)?;
        self.query.clear();
        self.render_all();
        Ok(())
    }

    /// 検索クエリで絞り込んで表示
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        let visible = self.visible();
        self.coordinator.render(&visible, &self.favorites);
    }

    /// 検索を解除して全件表示
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.render_all();
    }

    /// お気に入りを切り替え、検索を解除して全件表示する
    ///
    /// 保存に失敗した場合はお気に入りも表示も変わらない。
    pub fn toggle_favorite(&mut self, id: BusinessId) -> Result<bool> {
        let now_favorite = self.favorites.toggle(id)?;
        self.query.clear();
        self.render_all();
        Ok(now_favorite)
    }

    /// フォームの内容を追加して全件表示
    pub fn add(&mut self, form: &RecordForm) -> Result<BusinessRecord> {
        let created = editor::save(form, &mut self.store)?;
        self.render_all();
        Ok(created)
    }

    /// 取り込み。失敗時はストアも表示も変更しない
    pub fn import(&mut self, text: &str) -> Result<usize> {
        let count = gateway::import_json(&mut self.store, text)?;
        self.render_all();
        Ok(count)
    }

    pub fn export(&self) -> Result<String> {
        gateway::export_json(&self.store)
    }

    /// 現在のクエリで見えるレコード
    pub fn visible(&self) -> Vec<BusinessRecord> {
        if self.query.is_empty() {
            self.store.all().to_vec()
        } else {
            filter::filter(&self.query, self.store.all())
        }
    }

    pub fn store(&self) -> &BusinessStore {
        &self.store
    }

    pub fn favorites(&self) -> &FavoriteSet<K> {
        &self.favorites
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn coordinator(&self) -> &RenderCoordinator<M, L> {
        &self.coordinator
    }

    fn render_all(&mut self) {
        self.coordinator.render(self.store.all(), &self.favorites);
    }
}
