use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::ImagePreview;

use crate::browser;
use crate::context::use_app_context;

/// File input plus local preview of the selected image
#[component]
pub fn ImagePicker() -> impl IntoView {
    let ctx = use_app_context();
    let preview = ctx.preview;
    let selected_image = ctx.selected_image;

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = browser::selected_file(&input) else {
            return;
        };
        let ctx = ctx.clone();
        spawn_local(async move {
            match browser::read_image_file(&file).await {
                Ok(upload) => {
                    let preview = ImagePreview::DataUrl(upload.data_url());
                    ctx.set_image(upload, preview);
                }
                Err(e) => log::error!("[UPLOAD] {}", e),
            }
        });
    };

    view! {
        <label class="file-label">
            "Photo (optional)"
            <input type="file" accept="image/*" on:change=on_change />
        </label>
        {move || selected_image.with(|img| img.as_ref().map(|img| view! {
            <span class="file-name">{img.file_name.clone()}</span>
        }))}
        {move || preview.get().map(|p| view! {
            <img class="image-preview" src=p.src().to_string() alt="Preview" />
        })}
    }
}
