//! 検索フィルタ
//!
//! 名称・住所・州・バランガイのいずれかに、大文字小文字を区別せず
//! 部分一致するレコードを抽出する。インデックスは持たず毎回全件走査する。

use crate::types::BusinessRecord;

/// クエリに一致するレコードをストア順のまま返す
pub fn filter(query: &str, records: &[BusinessRecord]) -> Vec<BusinessRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_lowered(r, &needle))
        .cloned()
        .collect()
}

/// 1件のレコードがクエリに一致するか
pub fn matches(record: &BusinessRecord, query: &str) -> bool {
    matches_lowered(record, &query.to_lowercase())
}

fn matches_lowered(record: &BusinessRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&record.name, &record.address, &record.province, &record.barangay]
        .into_iter()
        .any(|field| !field.is_empty() && field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewBusiness;

    fn directory() -> Vec<BusinessRecord> {
        vec![
            NewBusiness {
                name: "Kape Kalye".to_string(),
                category: "Cafe".to_string(),
                address: "88 Katipunan Ave".to_string(),
                province: "Metro Manila".to_string(),
                barangay: "Loyola Heights".to_string(),
                ..Default::default()
            }
            .with_id(1),
            NewBusiness {
                name: "Lola's Bakery".to_string(),
                category: "Bakery".to_string(),
                address: "3 Rizal St".to_string(),
                province: "Cavite".to_string(),
                ..Default::default()
            }
            .with_id(2),
            NewBusiness {
                name: "Ocean Dive Shop".to_string(),
                category: "Sports".to_string(),
                notes: "Ask for Manila rates".to_string(),
                ..Default::default()
            }
            .with_id(3),
        ]
    }

    fn ids(records: &[BusinessRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let records = directory();
        assert_eq!(ids(&filter("", &records)), vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let records = directory();
        assert_eq!(ids(&filter("KAPE", &records)), vec![1]);
        assert_eq!(ids(&filter("bakery", &records)), vec![2]);
    }

    #[test]
    fn test_matches_address_province_barangay() {
        let records = directory();
        assert_eq!(ids(&filter("rizal", &records)), vec![2]);
        assert_eq!(ids(&filter("cavite", &records)), vec![2]);
        assert_eq!(ids(&filter("loyola", &records)), vec![1]);
    }

    #[test]
    fn test_category_and_notes_are_not_searched() {
        let records = directory();
        assert!(filter("sports", &records).is_empty());
        // "Manila"はnotesにもあるがprovinceに一致する1件のみ
        assert_eq!(ids(&filter("manila", &records)), vec![1]);
    }

    #[test]
    fn test_substring_across_multiple_records_keeps_store_order() {
        let records = directory();
        assert_eq!(ids(&filter("a", &records)), vec![1, 2, 3]);
        assert_eq!(ids(&filter("st", &records)), vec![2]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let records = directory();
        assert!(filter(" kape", &records).is_empty());
        assert_eq!(ids(&filter("kape ", &records)), vec![1]);
    }

    #[test]
    fn test_matches_single_record() {
        let records = directory();
        assert!(matches(&records[0], "heights"));
        assert!(!matches(&records[2], "cavite"));
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = directory();
        let before = serde_json::to_string(&records).unwrap();
        let _ = filter("lola", &records);
        assert_eq!(serde_json::to_string(&records).unwrap(), before);
    }
}
