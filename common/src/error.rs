//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 取り込みファイルがJSONとして解釈できない
    #[error("Invalid JSON file.")]
    InvalidJson(#[source] serde_json::Error),

    /// JSONではあるが事業所レコード配列の形をしていない
    #[error("Unexpected record layout: {0}")]
    InvalidShape(#[source] serde_json::Error),

    /// これ以上大きいIDを採番できない
    #[error("No business id available after {0}")]
    IdExhausted(i64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::InvalidJson(json_error);
        assert_eq!(format!("{}", error), "Invalid JSON file.");
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", error), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_display_id_exhausted() {
        let error = Error::IdExhausted(i64::MAX);
        assert_eq!(
            format!("{}", error),
            format!("No business id available after {}", i64::MAX)
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
