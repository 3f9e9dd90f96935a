pub mod components;
pub mod icons;
pub mod state;
pub mod store_client;

pub use store_client::StoreClient;

use leptos::prelude::*;

/// Store client provided by `App`.
pub fn use_store_client() -> StoreClient {
    use_context::<StoreClient>().expect("StoreClient context not found")
}
