//! お気に入り
//!
//! 事業所IDの集合をキーバリューストアに永続化する。変更のたびに
//! 集合全体をJSON配列として同期的に書き戻す。IDのみで紐付けるため、
//! 取り込みでストアが入れ替わってもお気に入りはそのまま残る。

use crate::error::Result;
use crate::types::BusinessId;
use std::collections::{BTreeSet, HashMap};

/// お気に入りを保存するキー
pub const FAVORITES_KEY: &str = "scoutly_favs";

/// 永続化先（ブラウザのlocalStorage、CLIのJSONファイル等）
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のキーバリューストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// お気に入り集合
#[derive(Debug)]
pub struct FavoriteSet<K: KeyValueStore> {
    ids: BTreeSet<BusinessId>,
    backend: K,
}

impl<K: KeyValueStore> FavoriteSet<K> {
    /// 保存済みのお気に入りを読み込む
    ///
    /// 未保存なら空集合。読み出せない・壊れた値は警告を出して空集合として扱う。
    pub fn load(backend: K) -> Self {
        let raw = match backend.get(FAVORITES_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "favorites storage unreadable, starting empty");
                None
            }
        };
        let ids = match raw {
            Some(raw) => match serde_json::from_str::<Vec<BusinessId>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "favorites entry unreadable, starting empty");
                    BTreeSet::new()
                }
            },
            None => BTreeSet::new(),
        };
        Self { ids, backend }
    }

    /// 集合全体を書き戻す
    pub fn persist(&mut self) -> Result<()> {
        let ids: Vec<BusinessId> = self.ids.iter().copied().collect();
        let raw = serde_json::to_string(&ids)?;
        self.backend.set(FAVORITES_KEY, &raw)
    }

    /// 追加/削除を切り替えて永続化し、切替後にお気に入りかどうかを返す
    ///
    /// 書き込みに失敗した場合は切替前の状態に戻す。
    pub fn toggle(&mut self, id: BusinessId) -> Result<bool> {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        if let Err(e) = self.persist() {
            if now_favorite {
                self.ids.remove(&id);
            } else {
                self.ids.insert(id);
            }
            return Err(e);
        }
        tracing::debug!(id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: BusinessId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = BusinessId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}
