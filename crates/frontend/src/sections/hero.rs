use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

const COLLAGE: [(&str, &str, &str); 4] = [
    (
        "https://images.pexels.com/photos/2121121/pexels-photo-2121121.jpeg?auto=compress&cs=tinysrgb&w=600",
        "Modern aluminum door",
        "hero__image--tall",
    ),
    (
        "https://images.pexels.com/photos/279810/pexels-photo-279810.jpeg?auto=compress&cs=tinysrgb&w=600",
        "Window installation",
        "hero__image--short",
    ),
    (
        "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg?auto=compress&cs=tinysrgb&w=600",
        "Modern kitchen",
        "hero__image--short",
    ),
    (
        "https://images.pexels.com/photos/1082220/pexels-photo-1082220.jpeg?auto=compress&cs=tinysrgb&w=600",
        "Aluminum frames",
        "hero__image--tall",
    ),
];

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="hero">
            <div class="container hero__grid">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        "Premium Aluminum"
                        <span class="hero__title-accent">"Fabrication"</span>
                    </h1>
                    <p class="hero__lead">
                        "Transform your space with expertly crafted aluminum doors, windows, and kitchen solutions. Quality that lasts a lifetime."
                    </p>
                    <div class="hero__actions">
                        <Button on_click=Callback::new(move |_| ctx.navigate_products(None))>
                            <span>"View Products"</span>
                            {icon("chevron-right")}
                        </Button>
                        <Button variant="outline" on_click=Callback::new(move |_| ctx.navigate_contact())>
                            "Get Quote"
                        </Button>
                    </div>
                </div>
                <div class="hero__collage">
                    {COLLAGE.into_iter().map(|(src, alt, size)| view! {
                        <img class=format!("hero__image {}", size) src=src alt=alt />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
