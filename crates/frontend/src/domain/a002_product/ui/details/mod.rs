//! Product detail page
//!
//! - view_model.rs: load by slug, selected image
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ProductDetailPage;
pub use view_model::ProductDetailViewModel;
