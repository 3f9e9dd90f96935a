use leptos::prelude::*;

/// Pill label on cards: "featured" (dark) or "glass" (translucent over images)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("featured") {
        "glass" => "badge--glass",
        _ => "badge--featured",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
