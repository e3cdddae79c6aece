//! Lost & Found App
//!
//! Top bar with search and camera, the item grid, and the report modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::ClientConfig;

use crate::components::{CameraButton, ItemGrid, SearchBar, UploadModal};
use crate::context::AppContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx.clone());

    // Initial load; later reloads are driven by the submission flow
    let controller = ctx.controller();
    Effect::new(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load_items().await;
        });
    });

    let modal_open = ctx.modal_open;

    view! {
        <div class="page">
            <header class="top-bar">
                <h1>"Lost & Found"</h1>
                <div class="search-row">
                    <SearchBar />
                    <CameraButton />
                </div>
                <button class="btn-found" on:click=move |_| modal_open.set(true)>
                    "I Found Something"
                </button>
            </header>

            <main class="main-content">
                <ItemGrid />
            </main>

            <UploadModal />
        </div>
    }
}
