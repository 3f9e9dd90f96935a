use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

use super::view_model::ProductDetailViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::{BackButton, CheckList, ErrorPanel, LoadingPanel};
use crate::shared::icons::icon;
use crate::shared::state::LoadStatus;
use crate::shared::use_store_client;

/// Static service promises shown under every product
const SERVICE_BADGES: [(&str, &str); 3] = [
    ("ruler", "Custom Sizes"),
    ("wrench", "Professional Install"),
    ("shield", "10 Year Warranty"),
];

#[component]
pub fn ProductDetailPage(slug: String) -> impl IntoView {
    let vm = ProductDetailViewModel::new(use_store_client(), slug);
    vm.load();
    let ctx = use_app_context();

    move || {
        match vm.page.status() {
            LoadStatus::Loading => return view! { <LoadingPanel /> }.into_any(),
            LoadStatus::Failed(error) => {
                return view! {
                    <div class="page">
                        <ErrorPanel error=error on_retry=Callback::new(move |_| vm.load()) />
                    </div>
                }
                .into_any();
            }
            LoadStatus::Ready => {}
        }
        match untrack(move || vm.product()) {
            Some(product) => view! { <ProductDetail vm=vm product=product /> }.into_any(),
            None => view! {
                <div class="status-panel status-panel--not-found">
                    <h2 class="status-panel__title">"Product not found"</h2>
                    <Button variant="link" on_click=Callback::new(move |_| ctx.navigate_back_to_products())>
                        "Go back"
                    </Button>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn ProductDetail(vm: ProductDetailViewModel, product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let images = product.all_images();
    let name = product.name.clone();
    let specifications: Vec<(String, String)> = product.specifications.clone().into_iter().collect();
    let price_range = (!product.price_range.is_empty()).then(|| product.price_range.clone());

    view! {
        <div class="page page--detail">
            <div class="container">
                <BackButton />

                <div class="detail">
                    <div class="detail__media">
                        <div class="detail__main-image">
                            <img src=move || vm.selected_image().unwrap_or_default() alt=name.clone() />
                        </div>
                        {(images.len() > 1).then(|| view! {
                            <ImageStrip vm=vm images=images name=product.name.clone() />
                        })}
                    </div>

                    <div class="detail__info">
                        <h1 class="detail__title">{product.name.clone()}</h1>
                        {price_range.map(|price| view! {
                            <div class="detail__price">{price}</div>
                        })}
                        <p class="detail__description">{product.long_description.clone()}</p>

                        {(!product.features.is_empty()).then(|| view! {
                            <CheckList title="Key Features" items=product.features.clone() class="panel panel--muted" />
                        })}

                        {(!specifications.is_empty()).then(|| view! {
                            <div class="panel">
                                <h3 class="panel__title">"Specifications"</h3>
                                <dl class="spec-table">
                                    {specifications.into_iter().map(|(key, value)| view! {
                                        <div class="spec-table__row">
                                            <dt class="spec-table__key">{key}</dt>
                                            <dd class="spec-table__value">{value}</dd>
                                        </div>
                                    }).collect_view()}
                                </dl>
                            </div>
                        })}

                        <div class="service-badges">
                            {SERVICE_BADGES.iter().map(|(icon_name, label)| view! {
                                <div class="service-badges__item">
                                    {icon(icon_name)}
                                    <div class="service-badges__label">{*label}</div>
                                </div>
                            }).collect_view()}
                        </div>

                        <Button block=true on_click=Callback::new(move |_| ctx.navigate_contact())>
                            "Request a Quote"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImageStrip(vm: ProductDetailViewModel, images: Vec<String>, name: String) -> impl IntoView {
    view! {
        <div class="thumbs">
            {images.into_iter().enumerate().map(|(idx, url)| {
                let current = url.clone();
                let target = url.clone();
                view! {
                    <button
                        class="thumbs__item"
                        class:thumbs__item--active=move || vm.selected_image().as_deref() == Some(current.as_str())
                        on:click=move |_| vm.select_image(target.clone())
                    >
                        <img src=url alt=format!("{} {}", name, idx + 1) />
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
