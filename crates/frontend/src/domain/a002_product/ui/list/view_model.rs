use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::catalog_filter::CategoryFilter;
use leptos::prelude::*;

use super::model::{fetch_catalog, Catalog};
use crate::shared::state::PageState;
use crate::shared::StoreClient;

/// ViewModel for the product catalog.
///
/// The category filter belongs to navigation (`View::Products`); the page is
/// rebuilt for every filter, so it only reads it. There is nothing to select
/// inside the catalog itself.
#[derive(Clone, Copy)]
pub struct ProductListViewModel {
    pub page: PageState<Catalog, ()>,
    /// Products visible under the page's filter
    pub filtered: Memo<Vec<Product>>,
    client: StoredValue<StoreClient>,
    filter: StoredValue<CategoryFilter>,
}

impl ProductListViewModel {
    pub fn new(client: StoreClient, filter: CategoryFilter) -> Self {
        let page = PageState::<Catalog, ()>::new();
        let filter = StoredValue::new(filter);
        let filtered = Memo::new(move |_| {
            filter.with_value(|filter| {
                page.with_data(|catalog| {
                    catalog
                        .map(|c| c.filtered(filter))
                        .unwrap_or_default()
                })
            })
        });
        Self {
            page,
            filtered,
            client: StoredValue::new(client),
            filter,
        }
    }

    /// (Re)fetch categories and products.
    pub fn load(&self) {
        let client = self.client.get_value();
        log::debug!("loading catalog, filter={}", self.filter.with_value(|f| f.key().to_string()));
        self.page.load(fetch_catalog(client), |_| None);
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter.get_value()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.page
            .with_data(|catalog| catalog.map(|c| c.categories.clone()).unwrap_or_default())
    }
}
