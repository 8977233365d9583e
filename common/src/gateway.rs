//! 書き出し・取り込み
//!
//! 書き出しはストア全体を整形済みJSONにする。取り込みはJSONを解釈できた
//! 場合のみストアを丸ごと置き換え、失敗時はストアとID採番を一切変更しない。

use crate::error::{Error, Result};
use crate::store::BusinessStore;
use crate::types::BusinessRecord;

/// 書き出しファイル名
pub const EXPORT_FILE_NAME: &str = "businesses.json";

/// 書き出しファイルのMIMEタイプ
pub const EXPORT_MIME: &str = "application/json";

/// ストア全体を整形済みJSON（2スペースインデント）にする
pub fn export_json(store: &BusinessStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store.all())?)
}

/// 取り込みファイルの内容をレコード列として解釈する
pub fn parse_records(text: &str) -> Result<Vec<BusinessRecord>> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(Error::InvalidJson)?;
    serde_json::from_value(value).map_err(Error::InvalidShape)
}

/// 取り込み内容でストアを置き換え、件数を返す
pub fn import_json(store: &mut BusinessStore, text: &str) -> Result<usize> {
    let records = parse_records(text)?;
    let count = records.len();
    store.load(records)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewBusiness;

    fn populated() -> BusinessStore {
        let mut store = BusinessStore::new();
        store.load(vec![
            NewBusiness {
                name: "Balut Express".to_string(),
                category: "Street food".to_string(),
                address: "Pateros".to_string(),
                lat: 14.545,
                lng: 121.068,
                notes: "Evenings only".to_string(),
                ..Default::default()
            }
            .with_id(3),
            NewBusiness {
                name: "Halo-Halo Hub".to_string(),
                lat: 14.6,
                lng: 121.0,
                ..Default::default()
            }
            .with_id(1),
        ])
        .unwrap();
        store
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let json = export_json(&populated()).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 3,"));
        assert!(json.contains("\"name\": \"Balut Express\""));
    }

    #[test]
    fn test_export_import_round_trip() {
        let original = populated();
        let json = export_json(&original).unwrap();

        let mut restored = BusinessStore::new();
        let count = import_json(&mut restored, &json).unwrap();

        assert_eq!(count, 2);
        assert_eq!(restored.all(), original.all());
        assert_eq!(restored.next_id(), 4);
    }

    #[test]
    fn test_export_empty_store() {
        let json = export_json(&BusinessStore::new()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_corrupt_import_leaves_store_untouched() {
        let mut store = populated();
        store.append(NewBusiness::default()).unwrap();
        let before = export_json(&store).unwrap();
        let next_id = store.next_id();

        let result = import_json(&mut store, "{ this is not json");

        assert!(matches!(result, Err(Error::InvalidJson(_))));
        assert_eq!(export_json(&store).unwrap(), before);
        assert_eq!(store.next_id(), next_id);
    }

    #[test]
    fn test_wrong_shape_import_leaves_store_untouched() {
        let mut store = populated();
        let before = export_json(&store).unwrap();

        for payload in [r#"{"id": 1}"#, r#"[{"name": "no id"}]"#, "42"] {
            let result = import_json(&mut store, payload);
            assert!(matches!(result, Err(Error::InvalidShape(_))), "{payload}");
        }
        assert_eq!(export_json(&store).unwrap(), before);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_import_with_max_id_leaves_store_untouched() {
        let mut store = populated();
        let before = export_json(&store).unwrap();

        let payload = format!(r#"[{{"id": {}, "name": "Overflow"}}]"#, i64::MAX);
        let result = import_json(&mut store, &payload);

        assert!(matches!(result, Err(Error::IdExhausted(_))));
        assert_eq!(export_json(&store).unwrap(), before);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_import_empty_array_resets_ids() {
        let mut store = populated();
        assert_eq!(import_json(&mut store, "[]").unwrap(), 0);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_invalid_json_message() {
        let err = parse_records("nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON file.");
    }
}
