use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::header::Brand;
use crate::shared::icons::icon;

/// (label, category slug) of the product quick links
const PRODUCT_LINKS: [(&str, &str); 3] = [
    ("Aluminum Doors", "doors"),
    ("Windows", "windows"),
    ("Kitchen Solutions", "kitchen"),
];

const SOCIAL_ICONS: [&str; 4] = ["facebook", "twitter", "instagram", "linkedin"];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container">
                <div class="footer__grid">
                    <div class="footer__column">
                        <Brand />
                        <p class="footer__tagline">
                            "Premium aluminum fabrication solutions for modern spaces."
                        </p>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__heading">"Products"</h4>
                        <ul class="footer__links">
                            {PRODUCT_LINKS.into_iter().map(|(label, slug)| view! {
                                <li class="footer__link" on:click=move |_| ctx.select_category(slug)>
                                    {label}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__heading">"Company"</h4>
                        <ul class="footer__links">
                            <li class="footer__link" on:click=move |_| ctx.navigate_about()>"About Us"</li>
                            <li class="footer__link" on:click=move |_| ctx.navigate_products(None)>"Services"</li>
                            <li class="footer__link" on:click=move |_| ctx.select_category("kitchen")>"Portfolio"</li>
                        </ul>
                    </div>

                    <div class="footer__column">
                        <h4 class="footer__heading">"Follow Us"</h4>
                        <div class="footer__social">
                            {SOCIAL_ICONS.into_iter().map(|name| view! {
                                <span class="footer__social-icon" title=name>{icon(name)}</span>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>"© 2024 AlumiFab. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
