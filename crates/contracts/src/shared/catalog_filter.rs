//! Category filtering of the product catalog.

use std::collections::HashMap;

use crate::domain::a001_category::aggregate::{Category, CategoryId};
use crate::domain::a002_product::aggregate::Product;

/// Key shown for the unfiltered catalog
pub const ALL_KEY: &str = "all";

/// Category with a dedicated gallery page instead of a catalog filter
pub const KITCHEN_SLUG: &str = "kitchen";

/// Which slice of the catalog is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Slug(String),
}

impl CategoryFilter {
    /// `None`, an empty slug and `"all"` all mean no filter.
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug.map(str::trim) {
            None | Some("") | Some(ALL_KEY) => CategoryFilter::All,
            Some(slug) => CategoryFilter::Slug(slug.to_string()),
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Slug(slug) => Some(slug),
        }
    }

    /// Stable key for chips and comparisons
    pub fn key(&self) -> &str {
        self.slug().unwrap_or(ALL_KEY)
    }
}

/// Products visible under `filter`.
///
/// `All` returns the collection unchanged. A slug keeps exactly the products
/// whose category resolves and carries that slug, so a product pointing at
/// a missing category only ever shows up under `All`. Input order is kept.
pub fn filter_products(
    products: &[Product],
    categories: &[Category],
    filter: &CategoryFilter,
) -> Vec<Product> {
    let Some(wanted) = filter.slug() else {
        return products.to_vec();
    };

    let slugs: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.slug.as_str()))
        .collect();

    products
        .iter()
        .filter(|p| slugs.get(&p.category_id).copied() == Some(wanted))
        .cloned()
        .collect()
}
