//! Lost & Found Core
//!
//! Framework-free client logic for the lost & found board:
//! - models: item records as the backend sends them
//! - store: the single source of truth for the grid, with fetch sequencing
//! - card / filter: pure projection from store to view
//! - api: REST client behind the `ItemsApi` trait
//! - controller: fetch, submit and delete flows

pub mod api;
pub mod card;
pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod form;
pub mod format;
pub mod models;
pub mod store;

pub use api::{HttpItemsApi, ItemsApi};
pub use card::{project, CardView, GridView};
pub use category::{extract_category, Category};
pub use config::ClientConfig;
pub use controller::{DeleteOutcome, ItemListController, Prompt};
pub use error::{ClientError, ClientResult, ValidationFailure};
pub use filter::{matches, visible_count};
pub use form::{ImagePreview, ImageUpload, NewItem, SubmissionForm};
pub use format::{time_ago, truncate};
pub use models::{ItemId, ItemRecord};
pub use store::{FetchTicket, ItemStore, LoadState, StoreCell};
