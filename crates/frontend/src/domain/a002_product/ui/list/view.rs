use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::catalog_filter::CategoryFilter;
use leptos::prelude::*;

use super::view_model::ProductListViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{
    stagger, CardAnimated, EmptyPanel, ErrorPanel, LoadingPanel, PageHeader,
};
use crate::shared::icons::icon;
use crate::shared::state::LoadStatus;
use crate::shared::use_store_client;

/// Features shown on a catalog card
const CARD_FEATURES: usize = 3;

#[component]
pub fn ProductsPage(filter: CategoryFilter) -> impl IntoView {
    let vm = ProductListViewModel::new(use_store_client(), filter);
    vm.load();

    view! {
        <div class="page page--catalog">
            <div class="container">
                <PageHeader
                    title="Our Products"
                    subtitle="Browse our complete range of premium aluminum fabrication solutions"
                />
                {move || match vm.page.status() {
                    LoadStatus::Loading => view! { <LoadingPanel /> }.into_any(),
                    LoadStatus::Failed(error) => view! {
                        <ErrorPanel error=error on_retry=Callback::new(move |_| vm.load()) />
                    }
                    .into_any(),
                    LoadStatus::Ready => view! {
                        <CategoryChips vm=vm />
                        <ProductGrid vm=vm />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Chips navigate, so the filter shown is always the one in `View::Products`.
#[component]
fn CategoryChips(vm: ProductListViewModel) -> impl IntoView {
    let ctx = use_app_context();
    let active = vm.filter();
    let chip = move |label: String, filter: CategoryFilter| {
        let is_active = filter == active;
        view! {
            <button
                class="chip"
                class:chip--active=is_active
                on:click=move |_| ctx.navigate_products(filter.slug().map(str::to_string))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="chips">
            {chip("All Products".to_string(), CategoryFilter::All)}
            {vm
                .categories()
                .into_iter()
                .map(|c| chip(c.name, CategoryFilter::Slug(c.slug)))
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductGrid(vm: ProductListViewModel) -> impl IntoView {
    move || {
        let products = vm.filtered.get();
        if products.is_empty() {
            return view! { <EmptyPanel message="No products found in this category." /> }
                .into_any();
        }
        view! {
            <div class="grid grid--3">
                {products
                    .into_iter()
                    .enumerate()
                    .map(|(index, product)| view! { <ProductCard product=product index=index /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn ProductCard(product: Product, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let slug = product.slug.clone();
    let features = product.feature_preview(CARD_FEATURES).to_vec();
    let price_range = (!product.price_range.is_empty()).then(|| product.price_range.clone());

    view! {
        <CardAnimated delay_ms=stagger(index) class="product-card">
            <div class="product-card__body" on:click=move |_| ctx.select_product(&slug)>
                <div class="product-card__media">
                    <img class="product-card__image" src=product.image_url.clone() alt=product.name.clone() />
                    {product.is_featured.then(|| view! {
                        <div class="product-card__badge">
                            <Badge>"Featured"</Badge>
                        </div>
                    })}
                    <div class="product-card__caption">
                        <h3 class="product-card__title">{product.name.clone()}</h3>
                        {price_range.map(|price| view! {
                            <p class="product-card__price">{price}</p>
                        })}
                    </div>
                </div>
                <div class="product-card__content">
                    <p class="product-card__description">{product.description.clone()}</p>
                    {(!features.is_empty()).then(|| view! {
                        <ul class="bullet-list">
                            {features.into_iter().map(|f| view! {
                                <li class="bullet-list__item">{f}</li>
                            }).collect_view()}
                        </ul>
                    })}
                    <Button block=true>
                        <span>"View Details"</span>
                        {icon("arrow-right")}
                    </Button>
                </div>
            </div>
        </CardAnimated>
    }
}
