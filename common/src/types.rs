//! 事業所レコードの型定義
//!
//! Web(WASM)とCLIで共有される型:
//! - BusinessRecord: ストアに格納される1件の事業所
//! - NewBusiness: 採番前の入力（idなし）

use crate::editor::parse_float;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 事業所ID（ストア内で一意）
pub type BusinessId = i64;

/// 事業所レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: BusinessId,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub category: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub province: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub barangay: String,

    #[serde(default = "not_a_number", with = "coordinate")]
    pub lat: f64,

    #[serde(default = "not_a_number", with = "coordinate")]
    pub lng: f64,

    #[serde(default, deserialize_with = "nullable_string")]
    pub notes: String,
}

/// 採番前の事業所（入力フォーム・追加用）
#[derive(Debug, Clone, PartialEq)]
pub struct NewBusiness {
    pub name: String,
    pub category: String,
    pub address: String,
    pub province: String,
    pub barangay: String,
    pub lat: f64,
    pub lng: f64,
    pub notes: String,
}

impl Default for NewBusiness {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            address: String::new(),
            province: String::new(),
            barangay: String::new(),
            lat: f64::NAN,
            lng: f64::NAN,
            notes: String::new(),
        }
    }
}

impl NewBusiness {
    /// IDを付与してレコード化
    pub fn with_id(self, id: BusinessId) -> BusinessRecord {
        BusinessRecord {
            id,
            name: self.name,
            category: self.category,
            address: self.address,
            province: self.province,
            barangay: self.barangay,
            lat: self.lat,
            lng: self.lng,
            notes: self.notes,
        }
    }
}

impl BusinessRecord {
    /// 座標が地図に置ける値か
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

fn not_a_number() -> f64 {
    f64::NAN
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 座標のシリアライズ
///
/// NaN/無限大は `null` として書き出し、読み込み時は `null`・文字列も受け付ける。
mod coordinate {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CoordinateVisitor)
    }

    struct CoordinateVisitor;

    impl<'de> Visitor<'de> for CoordinateVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, numeric string or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(parse_float(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<f64, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(CoordinateVisitor)
        }
    }
}
