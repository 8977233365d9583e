//! 一覧パネルコンポーネント

use leptos::prelude::*;
use scoutly_common::{BusinessId, ListItem};

#[component]
pub fn BusinessList<FT>(
    items: RwSignal<Vec<ListItem>>,
    on_toggle_favorite: FT,
) -> impl IntoView
where
    FT: Fn(BusinessId) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="listPanel" class="list-panel">
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(index, item)| (*index, item.clone())
                children=move |(_, item)| {
                    let on_toggle_favorite = on_toggle_favorite.clone();
                    view! { <BusinessItem item=item on_toggle_favorite=on_toggle_favorite /> }
                }
            />
        </div>
    }
}

#[component]
fn BusinessItem<FT>(item: ListItem, on_toggle_favorite: FT) -> impl IntoView
where
    FT: Fn(BusinessId) + 'static + Clone + Send + Sync,
{
    let id = item.id;
    let label = item.toggle_label();
    let subtitle = item.subtitle();

    view! {
        <div class="item" class:favorite=item.favorite>
            <strong>{item.name}</strong>
            <br />
            <small>{subtitle}</small>
            <br />
            <button
                class="btn btn-small btn-secondary"
                on:click=move |_| on_toggle_favorite(id)
            >
                {label}
            </button>
        </div>
    }
}
