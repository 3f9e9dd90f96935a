//! View navigation for the single-page storefront.
//!
//! The active view and its parameters are one tagged value, so a product
//! slug cannot exist outside the product-detail view and a category filter
//! cannot exist outside the catalog.

use contracts::shared::catalog_filter::{CategoryFilter, KITCHEN_SLUG};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Products {
        filter: CategoryFilter,
    },
    ProductDetail {
        slug: String,
    },
    KitchenDesigns,
    About,
    Contact,
}

/// Entries of the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Products,
    About,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Products,
        NavSection::About,
        NavSection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Products => "Products",
            NavSection::About => "About",
            NavSection::Contact => "Contact",
        }
    }
}

impl View {
    /// Navigation bar entry highlighted while this view is active
    pub fn section(&self) -> NavSection {
        match self {
            View::Home => NavSection::Home,
            View::Products { .. } | View::ProductDetail { .. } | View::KitchenDesigns => {
                NavSection::Products
            }
            View::About => NavSection::About,
            View::Contact => NavSection::Contact,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products { .. } => "products",
            View::ProductDetail { .. } => "product-detail",
            View::KitchenDesigns => "kitchen-designs",
            View::About => "about",
            View::Contact => "contact",
        }
    }
}

/// Navigation state machine. Starts at `Home`, has no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    view: View,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn navigate_home(&mut self) {
        self.view = View::Home;
    }

    /// Catalog, filtered to `category_slug` when given.
    pub fn navigate_products(&mut self, category_slug: Option<&str>) {
        self.view = View::Products {
            filter: CategoryFilter::from_slug(category_slug),
        };
    }

    /// Kitchen has its own gallery page; any other slug filters the catalog.
    pub fn select_category(&mut self, slug: &str) {
        if slug == KITCHEN_SLUG {
            self.view = View::KitchenDesigns;
        } else {
            self.navigate_products(Some(slug));
        }
    }

    pub fn select_product(&mut self, slug: &str) {
        self.view = View::ProductDetail {
            slug: slug.to_string(),
        };
    }

    /// Back to the unfiltered catalog.
    pub fn navigate_back_to_products(&mut self) {
        self.navigate_products(None);
    }

    pub fn navigate_about(&mut self) {
        self.view = View::About;
    }

    pub fn navigate_contact(&mut self) {
        self.view = View::Contact;
    }

    /// Entry point for the navigation bar.
    pub fn navigate_section(&mut self, section: NavSection) {
        match section {
            NavSection::Home => self.navigate_home(),
            NavSection::Products => self.navigate_products(None),
            NavSection::About => self.navigate_about(),
            NavSection::Contact => self.navigate_contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_views() -> Vec<Navigation> {
        let mut out = Vec::new();
        let mut nav = Navigation::new();
        out.push(nav.clone());
        nav.navigate_products(Some("doors"));
        out.push(nav.clone());
        nav.select_product("sliding-door");
        out.push(nav.clone());
        nav.select_category(KITCHEN_SLUG);
        out.push(nav.clone());
        nav.navigate_about();
        out.push(nav.clone());
        nav.navigate_contact();
        out.push(nav);
        out
    }

    #[test]
    fn test_initial_view_is_home() {
        assert_eq!(Navigation::new().view(), &View::Home);
    }

    #[test]
    fn test_kitchen_category_opens_gallery_from_anywhere() {
        for mut nav in all_views() {
            nav.select_category("kitchen");
            assert_eq!(nav.view(), &View::KitchenDesigns);
        }
    }

    #[test]
    fn test_other_category_filters_catalog_from_anywhere() {
        for mut nav in all_views() {
            nav.select_category("windows");
            assert_eq!(
                nav.view(),
                &View::Products {
                    filter: CategoryFilter::Slug("windows".into())
                }
            );
        }
    }

    #[test]
    fn test_back_from_detail_clears_filter() {
        let mut nav = Navigation::new();
        nav.select_category("doors");
        nav.select_product("french-door");
        assert_eq!(
            nav.view(),
            &View::ProductDetail {
                slug: "french-door".into()
            }
        );

        nav.navigate_back_to_products();
        assert_eq!(
            nav.view(),
            &View::Products {
                filter: CategoryFilter::All
            }
        );
    }

    #[test]
    fn test_back_from_kitchen_gallery() {
        let mut nav = Navigation::new();
        nav.select_category("kitchen");
        nav.navigate_back_to_products();
        assert_eq!(nav.view(), &View::Products { filter: CategoryFilter::All });
    }

    #[test]
    fn test_navigate_products_without_slug_is_unfiltered() {
        let mut nav = Navigation::new();
        nav.navigate_products(None);
        assert_eq!(nav.view(), &View::Products { filter: CategoryFilter::All });
        nav.navigate_products(Some("all"));
        assert_eq!(nav.view(), &View::Products { filter: CategoryFilter::All });
    }

    #[test]
    fn test_category_link_after_chip_change_restores_filter() {
        let mut nav = Navigation::new();
        nav.select_category("doors");
        let on_doors = nav.view().clone();

        // "All Products" chip
        nav.navigate_products(None);
        assert_ne!(nav.view(), &on_doors);

        // footer "Aluminum Doors" link: a real change, so the page is rebuilt
        nav.select_category("doors");
        assert_eq!(nav.view(), &on_doors);
        assert_eq!(
            nav.view(),
            &View::Products {
                filter: CategoryFilter::Slug("doors".into())
            }
        );
    }

    #[test]
    fn test_products_entry_after_chip_change_clears_filter() {
        let mut nav = Navigation::new();
        nav.navigate_section(NavSection::Products);
        nav.navigate_products(Some("windows"));
        nav.navigate_section(NavSection::Products);
        assert_eq!(nav.view(), &View::Products { filter: CategoryFilter::All });
    }

    #[test]
    fn test_home_drops_category() {
        let mut nav = Navigation::new();
        nav.select_category("doors");
        nav.navigate_home();
        assert_eq!(nav.view(), &View::Home);
        nav.navigate_section(NavSection::Products);
        assert_eq!(nav.view(), &View::Products { filter: CategoryFilter::All });
    }

    #[test]
    fn test_every_sequence_leaves_one_named_view() {
        let steps: [fn(&mut Navigation); 8] = [
            |n| n.navigate_home(),
            |n| n.navigate_products(Some("doors")),
            |n| n.select_category("kitchen"),
            |n| n.select_category("windows"),
            |n| n.select_product("p1"),
            |n| n.navigate_back_to_products(),
            |n| n.navigate_about(),
            |n| n.navigate_contact(),
        ];
        let names = [
            "home",
            "products",
            "product-detail",
            "kitchen-designs",
            "about",
            "contact",
        ];

        let mut nav = Navigation::new();
        // Walk a deterministic pseudo-random sequence over all steps.
        let mut seed: u32 = 7;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            steps[(seed >> 16) as usize % steps.len()](&mut nav);
            assert_eq!(
                names.iter().filter(|n| **n == nav.view().name()).count(),
                1
            );
        }
    }

    #[test]
    fn test_detail_and_gallery_highlight_products() {
        let mut nav = Navigation::new();
        nav.select_product("p1");
        assert_eq!(nav.view().section(), NavSection::Products);
        nav.select_category("kitchen");
        assert_eq!(nav.view().section(), NavSection::Products);
        nav.navigate_contact();
        assert_eq!(nav.view().section(), NavSection::Contact);
    }
}
