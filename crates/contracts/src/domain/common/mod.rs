//! Common types and traits for all store rows

pub mod aggregate_id;
pub mod aggregate_root;
pub mod serde_helpers;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::{order_by_sort, AggregateRoot, Sequenced};
pub use serde_helpers::null_as_default;
