use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutlyError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データ取得エラー: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("URLのデータは読み取り専用です: {0}")]
    ReadOnlySource(String),

    #[error("事業所が見つかりません: #{0}")]
    BusinessNotFound(i64),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Directory(#[from] scoutly_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoutlyError>;
