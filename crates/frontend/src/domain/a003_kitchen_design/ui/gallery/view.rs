use contracts::domain::a003_kitchen_design::aggregate::KitchenDesign;
use leptos::prelude::*;

use super::view_model::KitchenGalleryViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::components::{
    BackButton, CheckList, EmptyPanel, ErrorPanel, LoadingPanel, PageHeader,
};
use crate::shared::icons::icon;
use crate::shared::state::LoadStatus;
use crate::shared::use_store_client;

#[component]
pub fn KitchenDesignsPage() -> impl IntoView {
    let vm = KitchenGalleryViewModel::new(use_store_client());
    vm.load();

    move || {
        let status = vm.page.status();
        if status == LoadStatus::Loading {
            return view! { <LoadingPanel /> }.into_any();
        }
        view! {
            <div class="page page--gallery">
                <div class="container">
                    <BackButton />
                    <PageHeader
                        title="Kitchen Design Layouts"
                        subtitle="Explore our professional kitchen design options. Each layout is expertly crafted to maximize functionality and style for your space."
                    />
                    {match status {
                        LoadStatus::Failed(error) => view! {
                            <ErrorPanel error=error on_retry=Callback::new(move |_| vm.load()) />
                        }
                        .into_any(),
                        _ => view! { <Gallery vm=vm /> }.into_any(),
                    }}
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn Gallery(vm: KitchenGalleryViewModel) -> impl IntoView {
    let designs = vm.designs();
    if designs.is_empty() {
        return view! { <EmptyPanel message="No kitchen designs available." /> }.into_any();
    }

    view! {
        <div class="chips">
            {designs.into_iter().map(|design| {
                let id = design.id;
                view! {
                    <button
                        class="chip"
                        class:chip--active=move || vm.selected_id() == Some(id)
                        on:click=move |_| vm.select(id)
                    >
                        {design.name}
                    </button>
                }
            }).collect_view()}
        </div>
        {move || vm.selected_design().map(|design| view! { <DesignDetail design=design /> })}
    }
    .into_any()
}

#[component]
fn DesignDetail(design: KitchenDesign) -> impl IntoView {
    let ctx = use_app_context();
    let name = design.name.clone();

    view! {
        <div class="detail">
            <div class="detail__media">
                <div class="detail__main-image detail__main-image--wide">
                    <img src=design.image_url.clone() alt=design.name.clone() />
                </div>
                {(!design.gallery_images.is_empty()).then(|| view! {
                    <div class="thumbs thumbs--static">
                        {design.gallery_images.iter().enumerate().map(|(idx, url)| view! {
                            <div class="thumbs__item">
                                <img src=url.clone() alt=format!("{} example {}", name, idx + 1) />
                            </div>
                        }).collect_view()}
                    </div>
                })}
            </div>

            <div class="detail__info">
                <h2 class="detail__title">{design.name.clone()}</h2>
                <p class="detail__description">{design.description.clone()}</p>

                {(!design.dimensions.is_empty()).then(|| view! {
                    <div class="panel">
                        <div class="panel__heading">
                            {icon("maximize")}
                            <h3 class="panel__title">"Typical Dimensions"</h3>
                        </div>
                        <p>{design.dimensions.clone()}</p>
                    </div>
                })}

                {(!design.features.is_empty()).then(|| view! {
                    <CheckList title="Design Features" items=design.features.clone() class="panel" />
                })}

                {(!design.advantages.is_empty()).then(|| view! {
                    <CheckList title="Advantages" items=design.advantages.clone() class="panel panel--muted" />
                })}

                <Button block=true on_click=Callback::new(move |_| ctx.navigate_contact())>
                    "Request Custom Design"
                </Button>
            </div>
        </div>
    }
}
