use leptos::prelude::*;

use crate::context::use_app_context;

/// Search box; filters the grid on every keystroke
#[component]
pub fn SearchBar() -> impl IntoView {
    let search_term = use_app_context().search_term;

    view! {
        <input
            type="search"
            class="search-input"
            placeholder="Search for lost items..."
            prop:value=move || search_term.get()
            on:input=move |ev| search_term.set(event_target_value(&ev))
        />
    }
}
