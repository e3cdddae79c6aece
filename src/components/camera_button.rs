//! Camera Button Component
//!
//! Opens the device camera; a captured photo becomes the pending upload and
//! the report modal opens with it already attached.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::ImagePreview;

use crate::browser;
use crate::context::use_app_context;

#[component]
pub fn CameraButton() -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();

    let on_capture = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = browser::selected_file(&input) else {
            return;
        };
        let object_url = browser::create_object_url(&file);
        let ctx = ctx.clone();
        spawn_local(async move {
            match browser::read_image_file(&file).await {
                Ok(upload) => {
                    let preview = match object_url {
                        Some(url) => ImagePreview::ObjectUrl(url),
                        None => ImagePreview::DataUrl(upload.data_url()),
                    };
                    log::info!("[CAMERA] Captured {}", upload.file_name);
                    ctx.set_image(upload, preview);
                    ctx.modal_open.set(true);
                }
                Err(e) => {
                    if let Some(url) = object_url {
                        browser::revoke_object_url(&url);
                    }
                    log::error!("[CAMERA] {}", e);
                }
            }
        });
        // Same photo again should still fire change
        input.set_value("");
    };

    view! {
        <button
            type="button"
            class="camera-btn"
            title="Search with a photo"
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            "📷"
        </button>
        <input
            node_ref=input_ref
            type="file"
            accept="image/*"
            capture="environment"
            hidden=true
            on:change=on_capture
        />
    }
}
