//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use lost_found_core::{ClientConfig, HttpItemsApi, ImagePreview, ImageUpload, ItemListController, ItemStore, StoreCell};

use crate::browser::{self, BrowserPrompt};

/// `ItemStore` held in a reactive signal, so every store write re-renders the grid
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<ItemStore>);

impl StoreCell for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut ItemStore) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

pub type UiController = ItemListController<HttpItemsApi, SignalStore, BrowserPrompt>;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    controller: UiController,
    /// Last fetched items; the grid is projected from this
    pub store: RwSignal<ItemStore>,
    /// Current search box contents
    pub search_term: RwSignal<String>,
    /// Whether the report modal is shown
    pub modal_open: RwSignal<bool>,
    /// Image to send with the next submission
    pub selected_image: RwSignal<Option<ImageUpload>>,
    /// Local preview of `selected_image`
    pub preview: RwSignal<Option<ImagePreview>>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let store = RwSignal::new(ItemStore::new());
        Self {
            controller: ItemListController::new(HttpItemsApi::new(config), SignalStore(store), BrowserPrompt),
            store,
            search_term: RwSignal::new(String::new()),
            modal_open: RwSignal::new(false),
            selected_image: RwSignal::new(None),
            preview: RwSignal::new(None),
        }
    }

    /// Owned controller handle for use inside `spawn_local`
    pub fn controller(&self) -> UiController {
        self.controller.clone()
    }

    pub fn config(&self) -> &ClientConfig {
        self.controller.api().config()
    }

    /// Hold a newly picked image, releasing the previous preview
    pub fn set_image(&self, upload: ImageUpload, preview: ImagePreview) {
        self.release_preview();
        self.selected_image.set(Some(upload));
        self.preview.set(Some(preview));
    }

    pub fn clear_image(&self) {
        self.release_preview();
        self.selected_image.set(None);
        self.preview.set(None);
    }

    fn release_preview(&self) {
        if let Some(url) = self.preview.get_untracked().as_ref().and_then(ImagePreview::revocable) {
            browser::revoke_object_url(url);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
