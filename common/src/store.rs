//! 事業所ストア
//!
//! 地図・一覧の両方が参照する唯一のレコード集合。挿入順を保持し、
//! 暗黙のソートは行わない。

use crate::error::{Error, Result};
use crate::types::{BusinessId, BusinessRecord, NewBusiness};

/// 空のストアに最初に追加されるID
pub const DEFAULT_START_ID: BusinessId = 1;

/// 事業所ストア
#[derive(Debug, Clone)]
pub struct BusinessStore {
    records: Vec<BusinessRecord>,
    next_id: BusinessId,
}

impl Default for BusinessStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: DEFAULT_START_ID,
        }
    }
}

impl BusinessStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全件を置き換え、次のIDを `max(id) + 1` に再計算する
    ///
    /// 最大IDが `i64::MAX` の場合は次のIDを決められないため、
    /// ストアを変更せずに `Error::IdExhausted` を返す。
    pub fn load(&mut self, records: Vec<BusinessRecord>) -> Result<()> {
        let next_id = match records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1).ok_or(Error::IdExhausted(max))?,
            None => DEFAULT_START_ID,
        };
        self.next_id = next_id;
        self.records = records;
        tracing::debug!(count = self.records.len(), next_id = self.next_id, "store loaded");
        Ok(())
    }

    /// 末尾に追加してIDを払い出す（入力値の検証は行わない）
    pub fn append(&mut self, partial: NewBusiness) -> Result<&BusinessRecord> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::IdExhausted(id))?;
        self.records.push(partial.with_id(id));
        tracing::debug!(id, "record appended");
        Ok(&self.records[self.records.len() - 1])
    }

    /// 全レコード（挿入順）
    pub fn all(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn get(&self, id: BusinessId) -> Option<&BusinessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn next_id(&self) -> BusinessId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
