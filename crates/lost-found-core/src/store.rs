//! Item Store
//!
//! Single source of truth for the grid. The view is projected from here;
//! nothing reads state back out of the rendered page.
//!
//! The store only changes in two ways: wholesale replacement by a fetch, and
//! removal of one item after a successful delete.

use std::collections::HashSet;

use crate::models::{ItemId, ItemRecord};

/// Where the listing stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No fetch has completed yet
    #[default]
    Pending,
    Loaded,
    /// Last applied fetch failed; message is for the log
    Failed(String),
}

/// Sequence number handed out per fetch; only the newest is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<ItemRecord>,
    state: LoadState,
    last_issued: u64,
    /// Deleted on the server, still fading out on screen
    removing: HashSet<ItemId>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_removing(&self, id: &ItemId) -> bool {
        self.removing.contains(id)
    }

    /// Start a fetch, invalidating any still in flight
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.last_issued += 1;
        FetchTicket(self.last_issued)
    }

    /// Apply a fetch result. Returns false (and changes nothing) when a newer
    /// fetch has been started since `ticket` was issued.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<ItemRecord>, String>) -> bool {
        if ticket.0 != self.last_issued {
            log::debug!("[STORE] Discarding stale fetch #{} (latest #{})", ticket.0, self.last_issued);
            return false;
        }
        self.removing.clear();
        match result {
            Ok(items) => {
                self.items = items;
                self.state = LoadState::Loaded;
            }
            Err(msg) => {
                self.items.clear();
                self.state = LoadState::Failed(msg);
            }
        }
        true
    }

    /// Flag an item as fading out. Returns false if it is not in the store.
    pub fn mark_removing(&mut self, id: &ItemId) -> bool {
        if self.items.iter().any(|item| &item.id == id) {
            self.removing.insert(id.clone());
            true
        } else {
            false
        }
    }

    /// Drop exactly one item. Returns false if it was already gone.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        self.removing.remove(id);
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}

/// Shared, mutable handle to an `ItemStore`.
///
/// Lets the controller update the store across `.await` points without
/// knowing whether it lives in a reactive signal or a plain cell.
pub trait StoreCell {
    /// Run `f` against the store. `None` if the store is gone (view unmounted).
    fn update<R>(&self, f: impl FnOnce(&mut ItemStore) -> R) -> Option<R>;
}

#[cfg(test)]
impl StoreCell for std::rc::Rc<std::cell::RefCell<ItemStore>> {
    fn update<R>(&self, f: impl FnOnce(&mut ItemStore) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
