use leptos::prelude::*;

use crate::shared::icons::icon;

/// Titled list of check-marked lines (features, advantages)
#[component]
pub fn CheckList(
    #[prop(into)]
    title: String,
    items: Vec<String>,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("check-list {}", class)>
            <h3 class="check-list__title">{title}</h3>
            <ul class="check-list__items">
                {items.into_iter().map(|item| view! {
                    <li class="check-list__item">
                        <span class="check-list__mark">{icon("check")}</span>
                        <span>{item}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
