//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};
use scoutly_common::{
    BusinessId, DirectorySession, ListItem, MapConfig, RecordForm,
    DATA_URL, EXPORT_FILE_NAME, EXPORT_MIME,
};
use crate::api::places::fetch_places;
use crate::browser_store::BrowserStore;
use crate::components::{
    add_modal::AddModal,
    business_list::BusinessList,
    header::Header,
    map_view::{MapView, MAP_ELEMENT_ID},
    search_bar::SearchBar,
    toolbar::Toolbar,
};
use crate::js_bindings::{download_text_js, init_map_js};
use crate::surfaces::{LeafletLayer, SignalListPanel};

/// ブラウザ上のセッション
pub type WebSession = DirectorySession<BrowserStore, LeafletLayer, SignalListPanel>;

/// お気に入りを読み込んでセッションを作る
///
/// localStorageが読めない場合は空のお気に入りで続行する。
fn open_session(items: RwSignal<Vec<ListItem>>) -> WebSession {
    DirectorySession::new(BrowserStore, LeafletLayer, SignalListPanel::new(items))
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let items = RwSignal::new(Vec::<ListItem>::new());
    let session = StoredValue::new_local(open_session(items));
    let (query, set_query) = signal(String::new());
    let (modal_open, set_modal_open) = signal(false);
    let form = RwSignal::new(RecordForm::default());

    // 操作後に検索欄をセッションのクエリに合わせる
    let sync_query = move || {
        let current = session.with_value(|s| s.query().to_string());
        set_query.set(current);
    };

    // マウント後に地図を初期化し、初期データを1回だけ取得
    Effect::new(move |_| {
        let map = MapConfig::default();
        init_map_js(
            MAP_ELEMENT_ID,
            map.center_lat,
            map.center_lng,
            map.zoom,
            &map.tile_url,
            &map.attribution,
        );

        spawn_local(async move {
            match fetch_places(DATA_URL).await {
                Ok(records) => {
                    let mut result = Ok(());
                    session.update_value(|s| result = s.load_initial(records));
                    match result {
                        Ok(()) => sync_query(),
                        Err(e) => gloo::console::error!(format!("Error loading {}: {}", DATA_URL, e)),
                    }
                }
                Err(e) => {
                    gloo::console::error!(format!("Error loading {}", DATA_URL), e);
                }
            }
        });
    });

    // 検索ハンドラ
    let on_search = move |value: String| {
        session.update_value(|s| s.search(&value));
        set_query.set(value);
    };

    let on_clear_search = move |_| {
        session.update_value(|s| s.clear_search());
        sync_query();
    };

    // お気に入り切替ハンドラ
    let on_toggle_favorite = move |id: BusinessId| {
        session.update_value(|s| {
            if let Err(e) = s.toggle_favorite(id) {
                gloo::console::error!(format!("Failed to save favorites: {}", e));
            }
        });
        sync_query();
    };

    // 追加ハンドラ
    let on_open_add = move |_| set_modal_open.set(true);
    let on_cancel_add = move |_| set_modal_open.set(false);
    let on_save_add = move |_| {
        let current = form.get_untracked();
        let mut result = None;
        session.update_value(|s| result = Some(s.add(&current)));
        if let Some(Err(e)) = result {
            gloo::dialogs::alert(&e.to_string());
            return;
        }
        form.update(|f| f.clear());
        set_modal_open.set(false);
        sync_query();
    };

    // 書き出しハンドラ
    let on_export = move |_| {
        match session.with_value(|s| s.export()) {
            Ok(json) => download_text_js(&json, EXPORT_FILE_NAME, EXPORT_MIME),
            Err(e) => gloo::console::error!(format!("Export failed: {}", e)),
        }
    };

    // 取り込みハンドラ
    let on_import = move |file: File| {
        read_text_file(file, move |text| {
            let mut result = None;
            session.update_value(|s| result = Some(s.import(&text)));
            match result {
                Some(Ok(count)) => {
                    gloo::console::log!(format!("Imported {} businesses", count));
                    sync_query();
                }
                Some(Err(e)) => gloo::dialogs::alert(&e.to_string()),
                None => {}
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <Toolbar
                on_open_add=on_open_add
                on_export=on_export
                on_import=on_import
            />

            <SearchBar
                query=query
                on_search=on_search
                on_clear=on_clear_search
            />

            <div class="layout">
                <MapView />
                <BusinessList
                    items=items
                    on_toggle_favorite=on_toggle_favorite
                />
            </div>

            <AddModal
                visible=modal_open
                form=form
                on_save=on_save_add
                on_cancel=on_cancel_add
            />
        </div>
    }
}

/// アップロードされたファイルをテキストとして読む
fn read_text_file<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader unavailable", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(text) = result.as_string() {
                on_loaded(text);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_text(&file) {
        gloo::console::error!("Failed to read file", e);
    }
}
