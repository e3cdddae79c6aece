//! Browser Glue
//!
//! Blocking dialogs, file reading, object URLs and config bootstrap.

use js_sys::Uint8Array;
use lost_found_core::{ClientConfig, ImageUpload, Prompt};
use wasm_bindgen_futures::JsFuture;

/// Element holding an optional JSON config document
const CONFIG_ELEMENT_ID: &str = "lost-found-config";

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Read the inline JSON config if the page has one, else defaults.
///
/// Runs before the logger is installed, so problems go straight to the console.
pub fn load_config() -> ClientConfig {
    let defaults = match option_env!("LOST_FOUND_API_BASE") {
        Some(base) => ClientConfig::default().with_api_base(base),
        None => ClientConfig::default(),
    };
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|t| !t.trim().is_empty());
    let Some(text) = text else {
        return defaults;
    };
    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
            defaults
        }
    }
}

/// First file selected in an `<input type="file">`
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Read a picked file fully into memory
pub async fn read_image_file(file: &web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {:?}", file.name(), e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(ImageUpload::new(file.name(), file.type_(), bytes))
}

pub fn create_object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
