//! Shared types for the AlumiFab storefront.
//!
//! Everything here is platform-neutral: row types read from the hosted table
//! store, the query builder that addresses it, store configuration and the
//! fetch error taxonomy. The wasm frontend depends on this crate; nothing in
//! it touches the browser.

pub mod domain;
pub mod shared;
