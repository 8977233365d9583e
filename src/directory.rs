//! CLI用のディレクトリ操作
//!
//! データソース・お気に入りファイル・端末描画を束ねたセッションを組み立て、
//! 各サブコマンドの処理を提供する。

use crate::error::{Result, ScoutlyError};
use crate::source::{save_store, DataSource};
use crate::storage::FileStore;
use crate::terminal::{TerminalList, TerminalMap};
use scoutly_common::{BusinessId, BusinessRecord, DirectorySession, RecordForm};
use std::path::Path;

pub type CliSession = DirectorySession<FileStore, TerminalMap, TerminalList>;

pub struct Directory {
    source: DataSource,
    session: CliSession,
}

impl Directory {
    /// 表示用に開く（データ取得の失敗はログのみで空として続行）
    pub async fn open(source: DataSource, favorites_path: &Path) -> Result<Self> {
        let records = source.load_or_empty().await;
        Self::with_records(source, favorites_path, records)
    }

    /// 書き込み用に開く（URLは不可、読み込み失敗はエラー）
    pub async fn open_writable(source: DataSource, favorites_path: &Path) -> Result<Self> {
        source.writable_path()?;
        let records = source.load().await?;
        Self::with_records(source, favorites_path, records)
    }

    fn with_records(source: DataSource, favorites_path: &Path, records: Vec<BusinessRecord>) -> Result<Self> {
        let mut session = DirectorySession::new(
            FileStore::new(favorites_path),
            TerminalMap::default(),
            TerminalList::default(),
        );
        session.load_initial(records)?;
        Ok(Self { source, session })
    }

    pub fn session(&self) -> &CliSession {
        &self.session
    }

    /// 検索（空なら全件）して描画結果を返す
    pub fn list(&mut self, query: Option<&str>) -> &CliSession {
        match query {
            Some(q) => self.session.search(q),
            None => self.session.clear_search(),
        }
        &self.session
    }

    /// 追加して保存
    pub fn add(&mut self, form: &RecordForm) -> Result<BusinessRecord> {
        let path = self.source.writable_path()?.to_path_buf();
        let created = self.session.add(form)?;
        save_store(&path, self.session.store())?;
        Ok(created)
    }

    /// お気に入りを切り替え（存在しないIDは受け付けない）
    pub fn toggle_favorite(&mut self, id: BusinessId) -> Result<bool> {
        if self.session.store().get(id).is_none() {
            return Err(ScoutlyError::BusinessNotFound(id));
        }
        Ok(self.session.toggle_favorite(id)?)
    }

    /// 整形済みJSONとして書き出す
    pub fn export(&self, output: &Path) -> Result<usize> {
        let json = self.session.export()?;
        std::fs::write(output, json)?;
        Ok(self.session.store().len())
    }

    /// 取り込んでデータファイルを置き換える。失敗時はファイルも変更しない
    pub fn import(&mut self, input: &Path) -> Result<usize> {
        let path = self.source.writable_path()?.to_path_buf();
        let text = std::fs::read_to_string(input)?;
        let count = self.session.import(&text)?;
        save_store(&path, self.session.store())?;
        Ok(count)
    }
}
