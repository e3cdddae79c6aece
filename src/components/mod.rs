//! UI Components
//!
//! Leptos components for the lost & found page.

mod camera_button;
mod image_picker;
mod item_card;
mod item_grid;
mod search_bar;
mod upload_modal;

pub use camera_button::CameraButton;
pub use image_picker::ImagePicker;
pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use search_bar::SearchBar;
pub use upload_modal::UploadModal;
