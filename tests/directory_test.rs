//! ディレクトリ操作テスト
//!
//! データファイル・お気に入りファイルを一時ディレクトリに置いて
//! 一覧・追加・お気に入り・書き出し・取り込みを検証

use scoutly::directory::Directory;
use scoutly::error::ScoutlyError;
use scoutly::source::DataSource;
use scoutly_common::RecordForm;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const PLACES: &str = r#"[
  {"id": 1, "name": "Kape Kalye", "category": "Cafe", "address": "88 Katipunan Ave",
   "province": "Metro Manila", "barangay": "Loyola Heights", "lat": 14.6335, "lng": 121.0743, "notes": ""},
  {"id": 5, "name": "Lola's Bakery", "category": "Bakery", "address": "3 Rizal St",
   "province": "Cavite", "barangay": "Poblacion", "lat": 14.48, "lng": 120.9, "notes": "Pandesal at 5am"}
]"#;

struct Fixture {
    _dir: TempDir,
    data: PathBuf,
    favorites: PathBuf,
    root: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempdir().expect("Failed to create temp dir");
    let root = dir.path().to_path_buf();
    let data = root.join("places.json");
    std::fs::write(&data, PLACES).unwrap();
    Fixture {
        data,
        favorites: root.join("config").join("favorites.json"),
        root,
        _dir: dir,
    }
}

async fn open(f: &Fixture) -> Directory {
    Directory::open_writable(DataSource::File(f.data.clone()), &f.favorites)
        .await
        .expect("open failed")
}

fn listed_ids(directory: &Directory) -> Vec<i64> {
    directory.session().coordinator().list().items().iter().map(|i| i.id).collect()
}

/// 全件表示
#[tokio::test]
async fn test_open_renders_all_records() {
    let f = fixture();
    let directory = open(&f).await;

    assert_eq!(listed_ids(&directory), vec![1, 5]);
    assert_eq!(directory.session().coordinator().markers().markers().len(), 2);
}

/// 検索と解除
#[tokio::test]
async fn test_list_with_query() {
    let f = fixture();
    let mut directory = open(&f).await;

    directory.list(Some("CAVITE"));
    assert_eq!(listed_ids(&directory), vec![5]);

    directory.list(None);
    assert_eq!(listed_ids(&directory), vec![1, 5]);
}

/// 追加はファイルに保存され、IDは既存の最大値+1
#[tokio::test]
async fn test_add_persists_to_data_file() {
    let f = fixture();
    let mut directory = open(&f).await;

    let form = RecordForm {
        name: "Ukay-Ukay Corner".to_string(),
        lat: "14.55".to_string(),
        lng: "oops".to_string(),
        ..Default::default()
    };
    let created = directory.add(&form).expect("add failed");
    assert_eq!(created.id, 6);

    let reopened = open(&f).await;
    assert_eq!(listed_ids(&reopened), vec![1, 5, 6]);
    let stored = reopened.session().store().get(6).unwrap();
    assert!(stored.lng.is_nan());
}

/// 存在しないデータファイルは空として開き、最初のIDは1
#[tokio::test]
async fn test_missing_data_file_starts_empty() {
    let f = fixture();
    let source = DataSource::File(f.root.join("new").join("places.json"));
    let mut directory = Directory::open_writable(source, &f.favorites).await.unwrap();

    assert!(directory.session().store().is_empty());
    let created = directory.add(&RecordForm::default()).unwrap();
    assert_eq!(created.id, 1);
    assert!(f.root.join("new").join("places.json").exists());
}

/// お気に入りの切替は保存され、2回で元に戻る
#[tokio::test]
async fn test_toggle_favorite_twice() {
    let f = fixture();
    let mut directory = open(&f).await;

    assert!(directory.toggle_favorite(5).unwrap());
    let reopened = open(&f).await;
    assert!(reopened.session().favorites().is_favorite(5));

    assert!(!directory.toggle_favorite(5).unwrap());
    let reopened = open(&f).await;
    assert!(!reopened.session().favorites().is_favorite(5));
    assert!(std::fs::read_to_string(&f.favorites).unwrap().contains("[]"));
}

/// 存在しないIDのお気に入り切替
#[tokio::test]
async fn test_toggle_unknown_id() {
    let f = fixture();
    let mut directory = open(&f).await;

    let result = directory.toggle_favorite(99);
    assert!(matches!(result, Err(ScoutlyError::BusinessNotFound(99))));
    assert!(!f.favorites.exists());
}

/// 書き出し→取り込みで同じ内容に戻る
#[tokio::test]
async fn test_export_then_import_round_trip() {
    let f = fixture();
    let export_path = f.root.join("businesses.json");

    let directory = open(&f).await;
    assert_eq!(directory.export(&export_path).unwrap(), 2);
    let exported = std::fs::read_to_string(&export_path).unwrap();
    assert!(exported.starts_with("[\n  {"));

    // 別のデータで上書きしてから取り込む
    std::fs::write(&f.data, r#"[{"id": 40, "name": "Temp"}]"#).unwrap();
    let mut directory = open(&f).await;
    assert_eq!(directory.import(&export_path).unwrap(), 2);

    let reopened = open(&f).await;
    assert_eq!(listed_ids(&reopened), vec![1, 5]);
    assert_eq!(reopened.session().store().next_id(), 6);
    assert_eq!(std::fs::read_to_string(&f.data).unwrap(), exported);
}

/// 壊れたファイルの取り込みはデータファイルを変更しない
#[tokio::test]
async fn test_corrupt_import_leaves_data_untouched() {
    let f = fixture();
    let bad = f.root.join("bad.json");
    std::fs::write(&bad, "{ definitely not json").unwrap();

    let mut directory = open(&f).await;
    let result = directory.import(&bad);

    assert!(matches!(
        result,
        Err(ScoutlyError::Directory(scoutly_common::Error::InvalidJson(_)))
    ));
    assert_eq!(std::fs::read_to_string(&f.data).unwrap(), PLACES);
    assert_eq!(directory.session().store().next_id(), 6);
}

/// URLのデータは書き込み操作を受け付けない
#[tokio::test]
async fn test_url_source_rejects_writes() {
    let f = fixture();
    let source = DataSource::Url("https://example.invalid/places.json".to_string());
    let result = Directory::open_writable(source, &f.favorites).await;
    assert!(matches!(result, Err(ScoutlyError::ReadOnlySource(_))));
}

/// 壊れたデータファイルは表示用なら空、書き込み用ならエラー
#[tokio::test]
async fn test_unreadable_data_file() {
    let f = fixture();
    std::fs::write(&f.data, "<html>404</html>").unwrap();

    let directory = Directory::open(DataSource::File(f.data.clone()), &f.favorites)
        .await
        .unwrap();
    assert!(directory.session().store().is_empty());

    let writable = Directory::open_writable(DataSource::File(f.data.clone()), &f.favorites).await;
    assert!(writable.is_err());
    assert_eq!(std::fs::read_to_string(Path::new(&f.data)).unwrap(), "<html>404</html>");
}

/// 壊れたお気に入りファイルがあっても起動でき、切替で書き直される
#[tokio::test]
async fn test_corrupt_favorites_file_starts_empty() {
    let f = fixture();
    std::fs::create_dir_all(f.favorites.parent().unwrap()).unwrap();
    std::fs::write(&f.favorites, "garbage").unwrap();

    let mut directory = Directory::open(DataSource::File(f.data.clone()), &f.favorites)
        .await
        .expect("open failed");
    assert_eq!(listed_ids(&directory), vec![1, 5]);
    assert!(directory.session().favorites().is_empty());

    assert!(directory.toggle_favorite(1).unwrap());
    let reopened = open(&f).await;
    assert!(reopened.session().favorites().is_favorite(1));
}

/// 採番できない最大IDを含む取り込みはデータファイルを変更しない
#[tokio::test]
async fn test_import_with_max_id_leaves_data_untouched() {
    let f = fixture();
    let overflow = f.root.join("overflow.json");
    std::fs::write(&overflow, format!(r#"[{{"id": {}, "name": "Overflow"}}]"#, i64::MAX)).unwrap();

    let mut directory = open(&f).await;
    let result = directory.import(&overflow);

    assert!(matches!(
        result,
        Err(ScoutlyError::Directory(scoutly_common::Error::IdExhausted(_)))
    ));
    assert_eq!(std::fs::read_to_string(&f.data).unwrap(), PLACES);
    assert_eq!(listed_ids(&directory), vec![1, 5]);
}
