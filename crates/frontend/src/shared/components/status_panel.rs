//! Placeholders shown by data-backed pages while they are not showing rows.

use contracts::shared::errors::FetchError;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="status-panel status-panel--loading">
            {icon("loader")}
        </div>
    }
}

/// "Nothing here" message for an empty result
#[component]
pub fn EmptyPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--empty">
            <p class="status-panel__text">{message}</p>
        </div>
    }
}

/// Fetch-fault message with a retry action
#[component]
pub fn ErrorPanel(error: FetchError, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--error">
            <h2 class="status-panel__title">"Something went wrong"</h2>
            <p class="status-panel__text">{error.user_message()}</p>
            <Button variant="outline" on_click=Callback::new(move |_| on_retry.run(()))>
                {icon("refresh")}
                <span>"Try again"</span>
            </Button>
        </div>
    }
}
