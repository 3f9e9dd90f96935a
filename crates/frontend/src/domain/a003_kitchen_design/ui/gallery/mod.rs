//! Kitchen design gallery
//!
//! - view_model.rs: load, initial and current design
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::KitchenDesignsPage;
pub use view_model::KitchenGalleryViewModel;
