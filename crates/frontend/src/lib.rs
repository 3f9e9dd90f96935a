pub mod app;
pub mod domain;
pub mod layout;
pub mod sections;
pub mod shared;

use contracts::shared::config::StoreConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Misconfiguration is fatal: nothing can be shown without the store.
    let config = match StoreConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("store configuration: {}", e);
            panic!("store configuration: {e}");
        }
    };
    log::info!("table store at {}", config.url());

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}
