//! Item Card Component
//!
//! One found item: image, title, location, optional detail, AI suggestion,
//! category tag, time badge and a delete button bound to the item's id.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{filter, CardView, DeleteOutcome};

use crate::context::use_app_context;

/// Matches the `.item-card.removing` fade animation
const FADE_OUT_MS: u32 = 300;

#[component]
pub fn ItemCard(card: CardView) -> impl IntoView {
    let ctx = use_app_context();
    let search_term = ctx.search_term;
    let placeholder = ctx.config().placeholder_image.clone();

    let (img_src, set_img_src) = signal(card.image_url.clone());
    // A remounted fading card must not offer delete again
    let (deleting, set_deleting) = signal(card.removing);

    // Swap in the placeholder once; a broken image never fails the whole grid
    let on_img_error = move |_| {
        if img_src.get_untracked() != placeholder {
            log::warn!("[CARD] Image failed to load: {}", img_src.get_untracked());
            set_img_src.set(placeholder.clone());
        }
    };

    let visible_card = card.clone();
    let is_visible = move || filter::matches(&visible_card, &search_term.get());

    let id = card.id.clone();
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let controller = ctx.controller();
        let id = id.clone();
        spawn_local(async move {
            if let Ok(DeleteOutcome::Removed) = controller.delete_item(&id).await {
                TimeoutFuture::new(FADE_OUT_MS).await;
                controller.finish_removal(&id);
            } else {
                set_deleting.set(false);
            }
        });
    };

    let CardView { full_title, title, location_line, detail, ai_suggestion, category, time_ago, removing, .. } = card;

    view! {
        <div
            class="item-card"
            class:removing=removing
            style:display=move || if is_visible() { "block" } else { "none" }
        >
            <img src=move || img_src.get() alt=full_title.clone() on:error=on_img_error />
            <div class="card-info">
                <div class="card-meta">
                    <span class="tag">{category.as_str()}</span>
                    <span class="time-badge">{time_ago}</span>
                </div>
                <h3 title=full_title>{title}</h3>
                <p>{location_line}</p>
                {detail.map(|d| view! { <p class="item-detail">{d}</p> })}
                <p class="ai-suggestion">"AI: " {ai_suggestion}</p>
                <button
                    class="delete-btn"
                    disabled=move || deleting.get()
                    on:click=on_delete
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
