//! Product catalog page
//!
//! - model.rs: catalog fetch (categories and products joined)
//! - view_model.rs: load/select state and the filtered view
//! - view.rs: Leptos components

pub mod model;
mod view;
mod view_model;

pub use view::ProductsPage;
pub use view_model::ProductListViewModel;
