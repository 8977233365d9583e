//! 事業所追加の対話入力

use crate::error::{Result, ScoutlyError};
use dialoguer::Input;
use scoutly_common::editor::field;
use scoutly_common::RecordForm;

/// 入力欄のプロンプト
fn field_prompt(id: &str) -> &'static str {
    match id {
        field::NAME => "名称",
        field::CATEGORY => "カテゴリ",
        field::ADDRESS => "住所",
        field::PROVINCE => "州",
        field::BARANGAY => "バランガイ",
        field::LAT => "緯度",
        field::LNG => "経度",
        field::NOTES => "メモ",
        _ => "値",
    }
}

/// 空の項目だけ対話で埋める（空入力はそのまま空として受け付ける）
pub fn fill_missing_fields(form: &mut RecordForm) -> Result<()> {
    for id in field::ALL {
        if form.field(id).is_some_and(|v| !v.is_empty()) {
            continue;
        }
        let value: String = Input::new()
            .with_prompt(field_prompt(id))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScoutlyError::Prompt(e.to_string()))?;
        form.set_field(id, value);
    }
    Ok(())
}
