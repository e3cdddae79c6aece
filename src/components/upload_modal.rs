//! Upload Modal Component
//!
//! Form for reporting a found item. Stays open and populated on any error so
//! the user can retry; closes and resets only after a successful post. It
//! cannot be dismissed while a post is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::SubmissionForm;

use crate::components::ImagePicker;
use crate::context::use_app_context;

#[component]
pub fn UploadModal() -> impl IntoView {
    let ctx = use_app_context();
    let modal_open = ctx.modal_open;

    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (item_description, set_item_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let reset_ctx = ctx.clone();
    let close_and_reset = move || {
        modal_open.set(false);
        set_description.set(String::new());
        set_location.set(String::new());
        set_item_description.set(String::new());
        reset_ctx.clear_image();
    };

    let dismiss_reset = close_and_reset.clone();
    let on_dismiss = move || {
        if !submitting.get_untracked() {
            dismiss_reset();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = SubmissionForm {
            description: description.get_untracked(),
            location: location.get_untracked(),
            item_description: item_description.get_untracked(),
        };
        let image = ctx.selected_image.get_untracked();
        let controller = ctx.controller();
        let close_and_reset = close_and_reset.clone();

        set_submitting.set(true);
        spawn_local(async move {
            let result = controller.submit(&form, image).await;
            set_submitting.set(false);
            if result.is_ok() {
                close_and_reset();
            }
        });
    };

    view! {
        <Show when=move || modal_open.get()>
            <div class="modal" on:click={
                let dismiss = on_dismiss.clone();
                move |_| dismiss()
            }>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button type="button" class="close-btn" disabled=move || submitting.get() on:click={
                        let dismiss = on_dismiss.clone();
                        move |_| dismiss()
                    }>
                        "×"
                    </button>
                    <h2>"Report a Found Item"</h2>
                    <form on:submit=on_submit.clone()>
                        <input
                            type="text"
                            placeholder="What did you find?"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Where did you find it?"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Any other details (optional)"
                            prop:value=move || item_description.get()
                            on:input=move |ev| set_item_description.set(event_target_value(&ev))
                        />
                        <ImagePicker />
                        <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
