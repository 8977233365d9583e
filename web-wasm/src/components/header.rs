//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Scoutly"</h1>
            <p class="text-muted">"Local business directory"</p>
        </header>
    }
}
