//! Scoutly Common Library
//!
//! Web(WASM)とCLIで共有される事業所ディレクトリの中核

pub mod types;
pub mod config;
pub mod error;
pub mod store;
pub mod filter;
pub mod favorites;
pub mod render;
pub mod gateway;
pub mod editor;
pub mod session;

pub use types::{BusinessId, BusinessRecord, NewBusiness};
pub use config::{MapConfig, DATA_URL};
pub use error::{Error, Result};
pub use store::{BusinessStore, DEFAULT_START_ID};
pub use favorites::{FavoriteSet, KeyValueStore, MemoryStore, FAVORITES_KEY};
pub use render::{ListItem, ListPanel, MarkerLayer, MarkerSpec, Popup, RenderCoordinator};
pub use gateway::{export_json, import_json, parse_records, EXPORT_FILE_NAME, EXPORT_MIME};
pub use editor::{parse_float, RecordForm};
pub use session::DirectorySession;
