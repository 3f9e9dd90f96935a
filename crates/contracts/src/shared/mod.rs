pub mod catalog_filter;
pub mod config;
pub mod errors;
pub mod store_query;
