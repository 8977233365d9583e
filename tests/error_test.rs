//! エラーケーステスト

use scoutly::error::ScoutlyError;

/// ScoutlyErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ScoutlyError::Config("テスト設定エラー".to_string()),
        ScoutlyError::ReadOnlySource("https://example.com".to_string()),
        ScoutlyError::BusinessNotFound(3),
        ScoutlyError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// 共通エラーはそのままのメッセージで表示される
#[test]
fn test_directory_error_is_transparent() {
    let json_error = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
    let err: ScoutlyError = scoutly_common::Error::InvalidJson(json_error).into();
    assert_eq!(err.to_string(), "Invalid JSON file.");
}

#[test]
fn test_business_not_found_message() {
    assert_eq!(
        ScoutlyError::BusinessNotFound(42).to_string(),
        "事業所が見つかりません: #42"
    );
}
