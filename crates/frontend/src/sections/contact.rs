use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;

const DETAILS: [(&str, &str, &str); 3] = [
    ("phone", "Phone", "+1 (555) 123-4567"),
    ("mail", "Email", "info@alumifab.com"),
    ("map-pin", "Location", "123 Fabrication St, Industrial Park"),
];

const HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "8:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

const SERVICES: [&str; 4] = ["Aluminum Doors", "Windows", "Kitchen Solutions", "Other"];

/// Contact details and an enquiry form. The form is not wired to anything.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <PageHeader
                    title="Get In Touch"
                    subtitle="Ready to transform your space? Contact us for a free consultation"
                />
                <div class="contact">
                    <div class="contact__info">
                        <h3 class="contact__heading">"Contact Information"</h3>
                        {DETAILS.iter().map(|(icon_name, label, value)| view! {
                            <div class="contact__item">
                                <div class="contact__icon">{icon(icon_name)}</div>
                                <div>
                                    <div class="contact__label">{*label}</div>
                                    <div class="contact__value">{*value}</div>
                                </div>
                            </div>
                        }).collect_view()}

                        <div class="panel panel--muted">
                            <h4 class="panel__title">"Business Hours"</h4>
                            {HOURS.iter().map(|(days, hours)| view! {
                                <div class="contact__hours">
                                    <span>{*days}</span>
                                    <span class="contact__hours-time">{*hours}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <form class="form" on:submit=|ev| ev.prevent_default()>
                        <div class="form__group">
                            <label class="form__label">"Name"</label>
                            <input class="form__input" type="text" placeholder="Your name" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Email"</label>
                            <input class="form__input" type="email" placeholder="your@email.com" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Service"</label>
                            <select class="form__select">
                                <option>"Select a service"</option>
                                {SERVICES.iter().map(|service| view! { <option>{*service}</option> }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Message"</label>
                            <textarea
                                class="form__textarea"
                                rows="4"
                                placeholder="Tell us about your project..."
                            ></textarea>
                        </div>
                        <button type="submit" class="button button--primary button--block">
                            <span>"Send Message"</span>
                            {icon("send")}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
