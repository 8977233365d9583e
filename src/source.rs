//! 事業所データの読み書き
//!
//! データはローカルのJSONファイル、または読み取り専用のhttp(s) URL。

use crate::error::{Result, ScoutlyError};
use scoutly_common::{gateway, parse_records, BusinessRecord, BusinessStore};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl std::str::FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("データの場所が空です".to_string());
        }
        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(trimmed.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl DataSource {
    /// 書き込み先のファイル（URLなら読み取り専用エラー）
    pub fn writable_path(&self) -> Result<&Path> {
        match self {
            DataSource::File(path) => Ok(path),
            DataSource::Url(url) => Err(ScoutlyError::ReadOnlySource(url.clone())),
        }
    }

    /// レコードを読み込む
    ///
    /// ファイルが存在しなければ空。それ以外の失敗はエラーとして返す。
    pub async fn load(&self) -> Result<Vec<BusinessRecord>> {
        match self {
            DataSource::File(path) => {
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "data file missing, starting empty");
                    return Ok(Vec::new());
                }
                let content = std::fs::read_to_string(path)?;
                Ok(parse_records(&content)?)
            }
            DataSource::Url(url) => {
                let body = reqwest::get(url).await?.error_for_status()?.text().await?;
                Ok(parse_records(&body)?)
            }
        }
    }

    /// 初期表示用の読み込み。失敗はログに残して空として続行する
    pub async fn load_or_empty(&self) -> Vec<BusinessRecord> {
        match self.load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(source = %self, error = %e, "error loading businesses");
                Vec::new()
            }
        }
    }
}

/// ストアを整形済みJSONとして保存
pub fn save_store(path: &Path, store: &BusinessStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = gateway::export_json(store)?;
    std::fs::write(path, json)?;
    Ok(())
}
