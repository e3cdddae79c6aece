//! Item Grid Component
//!
//! Renders the projection of the item store: a loading/error/empty message,
//! or one card per item in backend order.

use chrono::Utc;
use leptos::prelude::*;
use lost_found_core::card::NO_MATCHES_MESSAGE;
use lost_found_core::{project, visible_count, GridView};

use crate::components::ItemCard;
use crate::context::use_app_context;

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let search_term = ctx.search_term;
    let config = ctx.config().clone();

    // Time-ago labels are recomputed whenever the store changes
    let grid = Memo::new(move |_| store.with(|s| project(s, &config, Utc::now())));

    let no_matches = move || {
        let term = search_term.get();
        grid.with(|g| !term.is_empty() && !g.cards().is_empty() && visible_count(g.cards(), &term) == 0)
    };

    view! {
        <div class="items-grid">
            {move || grid.with(|g| {
                let class = if matches!(g, GridView::Error(_)) { "grid-message error" } else { "grid-message" };
                g.message().map(|msg| view! { <p class=class>{msg}</p> })
            })}
            <For
                each=move || grid.with(|g| g.cards().to_vec())
                key=|card| (card.id.clone(), card.time_ago.clone(), card.removing)
                children=move |card| view! { <ItemCard card=card /> }
            />
            <Show when=no_matches>
                <p class="grid-message">{NO_MATCHES_MESSAGE}</p>
            </Show>
        </div>
    }
}
