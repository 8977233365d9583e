//! 事業所追加モーダルコンポーネント

use leptos::prelude::*;
use scoutly_common::editor::{field, RecordForm};

/// 入力欄のラベル
const FIELD_LABELS: [(&str, &str); 8] = [
    (field::NAME, "Business name"),
    (field::CATEGORY, "Category"),
    (field::ADDRESS, "Address"),
    (field::PROVINCE, "Province"),
    (field::BARANGAY, "Barangay"),
    (field::LAT, "Latitude"),
    (field::LNG, "Longitude"),
    (field::NOTES, "Notes"),
];

/// 入力欄の `type` と `step`（座標欄のみ数値入力）
fn input_kind(id: &str) -> (&'static str, Option<&'static str>) {
    match id {
        field::LAT | field::LNG => ("number", Some("any")),
        _ => ("text", None),
    }
}

#[component]
pub fn AddModal<FS, FC>(
    visible: ReadSignal<bool>,
    form: RwSignal<RecordForm>,
    on_save: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div
            id="modalBackdrop"
            class="modal-backdrop"
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <div class="modal">
                <h2>"Add Business"</h2>
                {FIELD_LABELS
                    .into_iter()
                    .map(|(id, label)| {
                        let (input_type, step) = input_kind(id);
                        view! {
                            <div class="form-group">
                                <label for=id>{label}</label>
                                <input
                                    type=input_type
                                    step=step
                                    id=id
                                    prop:value=move || {
                                        form.with(|f| f.field(id).unwrap_or_default().to_string())
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.set_field(id, value);
                                        });
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="modal-actions">
                    <button
                        id="cancelAdd"
                        class="btn btn-tertiary"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        id="saveAdd"
                        class="btn btn-primary"
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(())
                        }
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
