use contracts::shared::config::StoreConfig;
use leptos::prelude::*;

use crate::domain::a002_product::ui::details::ProductDetailPage;
use crate::domain::a002_product::ui::list::ProductsPage;
use crate::domain::a003_kitchen_design::ui::gallery::KitchenDesignsPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigation::View;
use crate::layout::{Footer, Header};
use crate::sections::{About, Contact, Hero, ProductShowcase};
use crate::shared::StoreClient;

#[component]
pub fn App(config: StoreConfig) -> impl IntoView {
    // Store access and navigation for the whole app via context.
    provide_context(StoreClient::new(config));
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    view! {
        <div class="app">
            <Header />
            <main class="app-main">
                {move || render_view(ctx.view.get())}
            </main>
            <Footer />
        </div>
    }
}

/// Page for the active view. Rebuilt only when the view changes, so every
/// entry into a data-backed page starts a fresh load.
fn render_view(view: View) -> AnyView {
    match view {
        View::Home => view! {
            <Hero />
            <ProductShowcase />
            <About />
            <Contact />
        }
        .into_any(),
        View::Products { filter } => view! { <ProductsPage filter=filter /> }.into_any(),
        View::ProductDetail { slug } => view! { <ProductDetailPage slug=slug /> }.into_any(),
        View::KitchenDesigns => view! { <KitchenDesignsPage /> }.into_any(),
        View::About => view! { <About /> }.into_any(),
        View::Contact => view! { <Contact /> }.into_any(),
    }
}
