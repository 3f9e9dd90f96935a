use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{stagger, CardAnimated, PageHeader};
use crate::shared::icons::icon;

/// One door into the catalog; `slug` goes through category selection
struct ShowcaseCard {
    slug: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    image_url: &'static str,
}

const CARDS: [ShowcaseCard; 3] = [
    ShowcaseCard {
        slug: "doors",
        icon: "door-open",
        title: "Aluminum Doors",
        description: "Sleek, durable doors with superior insulation and modern designs.",
        features: ["Sliding Doors", "French Doors", "Entry Doors", "Patio Doors"],
        image_url: "https://images.pexels.com/photos/2121121/pexels-photo-2121121.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    ShowcaseCard {
        slug: "windows",
        icon: "frame",
        title: "Windows",
        description: "Energy-efficient windows that combine style and functionality.",
        features: ["Casement Windows", "Sliding Windows", "Bay Windows", "Awning Windows"],
        image_url: "https://images.pexels.com/photos/279810/pexels-photo-279810.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    ShowcaseCard {
        slug: "kitchen",
        icon: "chef-hat",
        title: "Kitchen Solutions",
        description: "Custom aluminum kitchen cabinets and fixtures built to perfection.",
        features: ["Cabinets", "Countertops", "Backsplashes", "Storage Systems"],
        image_url: "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
];

#[component]
pub fn ProductShowcase() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="section">
            <div class="container">
                <PageHeader
                    title="Our Products"
                    subtitle="Discover our range of premium aluminum fabrication solutions"
                />
                <div class="card-grid card-grid--3">
                    {CARDS.iter().enumerate().map(|(index, card)| {
                        let slug = card.slug;
                        view! {
                            <CardAnimated delay_ms=stagger(index) class="showcase-card">
                                <div class="showcase-card__media">
                                    <img src=card.image_url alt=card.title />
                                    <Badge variant="glass">"Premium"</Badge>
                                </div>
                                <div class="showcase-card__body">
                                    <div class="showcase-card__icon">{icon(card.icon)}</div>
                                    <h3 class="showcase-card__title">{card.title}</h3>
                                    <p class="showcase-card__description">{card.description}</p>
                                    <ul class="bullet-list">
                                        {card.features.iter().map(|feature| view! {
                                            <li class="bullet-list__item">{*feature}</li>
                                        }).collect_view()}
                                    </ul>
                                    <Button block=true on_click=Callback::new(move |_| ctx.select_category(slug))>
                                        <span>"Learn More"</span>
                                        {icon("arrow-right")}
                                    </Button>
                                </div>
                            </CardAnimated>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
