use leptos::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

use super::navigation::{NavSection, Navigation, View};

/// App-wide navigation store, provided once by `App`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    navigation: RwSignal<Navigation>,
    /// Current view; only notifies when the view actually changes. It is the
    /// only holder of navigation parameters, including the catalog filter.
    pub view: Memo<View>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let navigation = RwSignal::new(Navigation::new());
        let view = Memo::new(move |_| navigation.with(|nav| nav.view().clone()));
        Self { navigation, view }
    }

    fn apply(&self, action: &str, f: impl FnOnce(&mut Navigation)) {
        self.navigation.update(f);
        self.navigation.with_untracked(|nav| {
            log::debug!("navigation: {} -> {} ({:?})", action, nav.view().name(), nav.view());
        });
        scroll_to_top();
    }

    pub fn navigate_home(&self) {
        self.apply("home", Navigation::navigate_home);
    }

    pub fn navigate_products(&self, category_slug: Option<String>) {
        self.apply("products", |nav| nav.navigate_products(category_slug.as_deref()));
    }

    pub fn select_category(&self, slug: &str) {
        self.apply("select_category", |nav| nav.select_category(slug));
    }

    pub fn select_product(&self, slug: &str) {
        self.apply("select_product", |nav| nav.select_product(slug));
    }

    pub fn navigate_back_to_products(&self) {
        self.apply("back_to_products", Navigation::navigate_back_to_products);
    }

    pub fn navigate_about(&self) {
        self.apply("about", Navigation::navigate_about);
    }

    pub fn navigate_contact(&self) {
        self.apply("contact", Navigation::navigate_contact);
    }

    pub fn navigate_section(&self, section: NavSection) {
        self.apply(section.label(), |nav| nav.navigate_section(section));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut for components below `App`.
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(w) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        w.scroll_to_with_scroll_to_options(&options);
    }
}
