//! 事業所追加フォーム
//!
//! 入力欄の生の文字列を保持し、座標だけ数値に変換して `NewBusiness` を作る。
//! 必須チェックは行わず、数値でない座標は NaN として通す。

use crate::error::Result;
use crate::store::BusinessStore;
use crate::types::{BusinessRecord, NewBusiness};

/// 入力欄のID（UI側で参照される固定名）
pub mod field {
    pub const NAME: &str = "b_name";
    pub const CATEGORY: &str = "b_category";
    pub const ADDRESS: &str = "b_address";
    pub const PROVINCE: &str = "b_province";
    pub const BARANGAY: &str = "b_barangay";
    pub const LAT: &str = "b_lat";
    pub const LNG: &str = "b_lng";
    pub const NOTES: &str = "b_notes";

    pub const ALL: [&str; 8] = [NAME, CATEGORY, ADDRESS, PROVINCE, BARANGAY, LAT, LNG, NOTES];
}

/// 追加フォームの入力値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    pub name: String,
    pub category: String,
    pub address: String,
    pub province: String,
    pub barangay: String,
    pub lat: String,
    pub lng: String,
    pub notes: String,
}

impl RecordForm {
    /// 入力欄IDで値を設定（未知のIDは無視してfalse）
    pub fn set_field(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// 入力欄IDで値を取得
    pub fn field(&self, id: &str) -> Option<&str> {
        let value = match id {
            field::NAME => &self.name,
            field::CATEGORY => &self.category,
            field::ADDRESS => &self.address,
            field::PROVINCE => &self.province,
            field::BARANGAY => &self.barangay,
            field::LAT => &self.lat,
            field::LNG => &self.lng,
            field::NOTES => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut String> {
        match id {
            field::NAME => Some(&mut self.name),
            field::CATEGORY => Some(&mut self.category),
            field::ADDRESS => Some(&mut self.address),
            field::PROVINCE => Some(&mut self.province),
            field::BARANGAY => Some(&mut self.barangay),
            field::LAT => Some(&mut self.lat),
            field::LNG => Some(&mut self.lng),
            field::NOTES => Some(&mut self.notes),
            _ => None,
        }
    }

    pub fn to_new_business(&self) -> NewBusiness {
        NewBusiness {
            name: self.name.clone(),
            category: self.category.clone(),
            address: self.address.clone(),
            province: self.province.clone(),
            barangay: self.barangay.clone(),
            lat: parse_float(&self.lat),
            lng: parse_float(&self.lng),
            notes: self.notes.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// フォームの内容をストアに追加し、作成されたレコードを返す
pub fn save(form: &RecordForm, store: &mut BusinessStore) -> Result<BusinessRecord> {
    Ok(store.append(form.to_new_business())?.clone())
}

/// 先頭の空白を読み飛ばし、数値として解釈できる最長の接頭辞を浮動小数点に変換する
///
/// 数値が1桁も読めなければ NaN。`"14.5abc"` は 14.5、`"Infinity"` は無限大。
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // 指数部は数字が続く場合のみ採用
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
