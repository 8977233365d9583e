//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<FS, FC>(
    query: ReadSignal<String>,
    on_search: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="search-bar">
            <input
                type="search"
                id="searchInput"
                placeholder="Search name, address, province, barangay..."
                prop:value=move || query.get()
                on:input={
                    let on_search = on_search.clone();
                    move |ev| on_search(event_target_value(&ev))
                }
            />
            <button
                id="clearSearch"
                class="btn btn-tertiary btn-small"
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "Clear"
            </button>
        </div>
    }
}
