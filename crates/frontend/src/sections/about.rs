use leptos::prelude::*;

use crate::shared::components::{stagger, CardAnimated, PageHeader};
use crate::shared::icons::icon;

/// (icon, title, description)
const VALUES: [(&str, &str, &str); 4] = [
    ("award", "Quality Craftsmanship", "Over 20 years of experience in aluminum fabrication"),
    ("users", "Expert Team", "Skilled professionals dedicated to excellence"),
    ("clock", "Timely Delivery", "Projects completed on schedule, every time"),
    ("shield", "Warranty", "Comprehensive warranty on all our products"),
];

const STATS: [(&str, &str); 3] = [
    ("500+", "Projects Completed"),
    ("20+", "Years Experience"),
    ("100%", "Client Satisfaction"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="section section--muted">
            <div class="container">
                <PageHeader
                    title="Why Choose Us"
                    subtitle="We deliver exceptional quality and service in every project"
                />
                <div class="card-grid card-grid--4">
                    {VALUES.iter().enumerate().map(|(index, (icon_name, title, description))| view! {
                        <CardAnimated delay_ms=stagger(index) class="value-card">
                            <div class="value-card__icon">{icon(icon_name)}</div>
                            <h3 class="value-card__title">{*title}</h3>
                            <p class="value-card__description">{*description}</p>
                        </CardAnimated>
                    }).collect_view()}
                </div>
                <div class="stats">
                    {STATS.iter().map(|(value, label)| view! {
                        <div class="stats__item">
                            <div class="stats__value">{*value}</div>
                            <div class="stats__label">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
