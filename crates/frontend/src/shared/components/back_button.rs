use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;

/// Returns to the unfiltered catalog
#[component]
pub fn BackButton() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <button class="back-link" on:click=move |_| ctx.navigate_back_to_products()>
            {icon("arrow-left")}
            <span>"Back to Products"</span>
        </button>
    }
}
