use crate::error::{Result, ScoutlyError};
use scoutly_common::MapConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 事業所データ（ファイルパスまたはURL）
    pub data_path: String,
    /// お気に入りの保存先（未指定なら設定ディレクトリ内）
    pub favorites_path: Option<PathBuf>,
    pub map: MapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: scoutly_common::DATA_URL.into(),
            favorites_path: None,
            map: MapConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScoutlyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("scoutly"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// お気に入りファイルのパス
    pub fn favorites_file(&self) -> Result<PathBuf> {
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("favorites.json")),
        }
    }

    pub fn set_data_path(&mut self, path: String) -> Result<()> {
        self.data_path = path;
        self.save()
    }
}
