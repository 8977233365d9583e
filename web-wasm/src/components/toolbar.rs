//! ツールバーコンポーネント（追加・書き出し・取り込み）

use leptos::prelude::*;
use leptos::html;
use web_sys::File;

#[component]
pub fn Toolbar<FA, FE, FI>(
    on_open_add: FA,
    on_export: FE,
    on_import: FI,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
    FI: Fn(File) + 'static + Clone,
{
    let file_input: NodeRef<html::Input> = NodeRef::new();

    view! {
        <div class="toolbar">
            <button
                id="addBtn"
                class="btn btn-primary"
                on:click={
                    let on_open_add = on_open_add.clone();
                    move |_| on_open_add(())
                }
            >
                "+ Add Business"
            </button>

            <button
                id="exportBtn"
                class="btn btn-secondary"
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Export"
            </button>

            <button
                id="importBtn"
                class="btn btn-secondary"
                on:click=move |_| {
                    // 非表示のファイル選択を開く
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                "Import"
            </button>

            <input
                type="file"
                id="importFile"
                accept="application/json,.json"
                style="display: none"
                node_ref=file_input
                on:change={
                    let on_import = on_import.clone();
                    move |_| {
                        let Some(input) = file_input.get() else { return };
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            on_import(file);
                        }
                        // 同じファイルを再選択できるようにする
                        input.set_value("");
                    }
                }
            />
        </div>
    }
}
