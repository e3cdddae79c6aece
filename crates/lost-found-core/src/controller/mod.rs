//! Item List Controller
//!
//! Fetch/render, submission and deletion flows over an `ItemsApi`, writing
//! into an `ItemStore`. The grid itself is projected from the store by
//! `card::project`; this module never builds view state directly.

use crate::api::ItemsApi;
use crate::card::{DELETE_CONFIRM_MESSAGE, DELETE_ERROR_MESSAGE};
use crate::error::{ClientError, ClientResult};
use crate::form::{ImageUpload, SubmissionForm};
use crate::models::ItemId;
use crate::store::StoreCell;


/// Blocking user-facing notifications
pub trait Prompt {
    fn alert(&self, message: &str);
    /// Ask a yes/no question; true means go ahead
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined, or the item is already fading out; nothing was sent
    Cancelled,
    /// Server confirmed; card is fading out until `finish_removal`
    Removed,
}

#[derive(Debug, Clone)]
pub struct ItemListController<A, S, P> {
    api: A,
    store: S,
    prompt: P,
}

impl<A, S, P> ItemListController<A, S, P>
where
    A: ItemsApi,
    S: StoreCell,
    P: Prompt,
{
    pub fn new(api: A, store: S, prompt: P) -> Self {
        Self { api, store, prompt }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the collection and replace the store's contents.
    ///
    /// Failures are logged and shown inline by the projection; a response
    /// that arrives after a newer fetch was started is dropped.
    pub async fn load_items(&self) {
        let Some(ticket) = self.store.update(|s| s.begin_fetch()) else {
            return;
        };
        let result = match self.api.list_items().await {
            Ok(items) => {
                log::info!("[LOAD] Loaded {} items", items.len());
                Ok(items)
            }
            Err(e) => {
                log::error!("[LOAD] Failed to load items: {}", e);
                Err(e.to_string())
            }
        };
        self.store.update(|s| s.apply_fetch(ticket, result));
    }

    /// Validate and post a new item, then reload the grid.
    ///
    /// On any error the user is alerted and the error is returned so the
    /// caller keeps the modal open with the form populated.
    pub async fn submit(&self, form: &SubmissionForm, image: Option<ImageUpload>) -> ClientResult<()> {
        let item = match form.validate(image) {
            Ok(item) => item,
            Err(failure) => {
                log::warn!("[SUBMIT] Rejected form: {}", failure);
                return Err(self.report(failure.into()));
            }
        };

        if let Err(e) = self.api.create_item(&item).await {
            log::warn!("[SUBMIT] Create failed: {}", e);
            return Err(self.report(e));
        }

        log::info!("[SUBMIT] Created item '{}'", item.description);
        self.load_items().await;
        Ok(())
    }

    /// Confirm, delete on the server, then start the card's fade-out.
    ///
    /// Call `finish_removal` once the fade is done to drop the card.
    pub async fn delete_item(&self, id: &ItemId) -> ClientResult<DeleteOutcome> {
        if self.store.update(|s| s.is_removing(id)).unwrap_or(false) {
            log::debug!("[DELETE] Item {} already removing", id);
            return Ok(DeleteOutcome::Cancelled);
        }
        if !self.prompt.confirm(DELETE_CONFIRM_MESSAGE) {
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.api.delete_item(id).await {
            log::warn!("[DELETE] Item {} failed: {}", id, e);
            self.prompt.alert(DELETE_ERROR_MESSAGE);
            return Err(e);
        }

        log::info!("[DELETE] Item {} deleted", id);
        self.store.update(|s| s.mark_removing(id));
        Ok(DeleteOutcome::Removed)
    }

    /// Drop a deleted card from the store. Returns false if it was already gone.
    pub fn finish_removal(&self, id: &ItemId) -> bool {
        self.store.update(|s| s.remove(id)).unwrap_or(false)
    }

    fn report(&self, err: ClientError) -> ClientError {
        self.prompt.alert(&err.user_message());
        err
    }
}
