use std::future::Future;

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::order_by_sort;
use contracts::shared::catalog_filter::{filter_products, CategoryFilter};
use contracts::shared::errors::FetchError;

use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a002_product::api::fetch_products;
use crate::shared::StoreClient;

/// Everything the catalog page renders from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Product> {
        filter_products(&self.products, &self.categories, filter)
    }
}

/// Await both reads together; the catalog exists only once both settled.
///
/// Either failure fails the whole catalog so the page never shows products
/// without their categories (or the reverse).
pub async fn join_catalog<C, P>(categories: C, products: P) -> Result<Catalog, FetchError>
where
    C: Future<Output = Result<Vec<Category>, FetchError>>,
    P: Future<Output = Result<Vec<Product>, FetchError>>,
{
    let (categories, products) = futures::join!(categories, products);
    Ok(Catalog {
        categories: categories?,
        products: order_by_sort(products?),
    })
}

pub async fn fetch_catalog(client: StoreClient) -> Result<Catalog, FetchError> {
    let catalog = join_catalog(fetch_categories(&client), fetch_products(&client)).await?;
    log::info!(
        "catalog loaded: {} categories, {} products",
        catalog.categories.len(),
        catalog.products.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::{LoadPhase, PageLoad};
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    type Reply<T> = oneshot::Sender<Result<Vec<T>, FetchError>>;

    fn category(id: u128, slug: &str) -> Category {
        serde_json::from_value(json!({
            "id": Uuid::from_u128(id),
            "name": slug,
            "slug": slug,
        }))
        .unwrap()
    }

    fn product(id: u128, category_id: u128, sort_order: i32) -> Product {
        serde_json::from_value(json!({
            "id": Uuid::from_u128(id),
            "category_id": Uuid::from_u128(category_id),
            "name": format!("p{}", id),
            "slug": format!("p{}", id),
            "sort_order": sort_order,
        }))
        .unwrap()
    }

    /// Catalog page state driven by two manually resolved reads.
    struct Harness {
        pool: LocalPool,
        state: Rc<RefCell<PageLoad<Catalog, ()>>>,
        transitions: Rc<RefCell<u32>>,
        categories: Option<Reply<Category>>,
        products: Option<Reply<Product>>,
    }

    impl Harness {
        fn start() -> Self {
            let pool = LocalPool::new();
            let state = Rc::new(RefCell::new(PageLoad::new()));
            let transitions = Rc::new(RefCell::new(0));
            let (cat_tx, cat_rx) = oneshot::channel();
            let (prod_tx, prod_rx) = oneshot::channel();

            let ticket = state.borrow_mut().begin();
            let task_state = state.clone();
            let task_transitions = transitions.clone();
            pool.spawner()
                .spawn_local(async move {
                    let result = join_catalog(
                        async { cat_rx.await.unwrap() },
                        async { prod_rx.await.unwrap() },
                    )
                    .await;
                    if task_state
                        .borrow_mut()
                        .finish(ticket, result, |_| None)
                    {
                        *task_transitions.borrow_mut() += 1;
                    }
                })
                .unwrap();

            Self {
                pool,
                state,
                transitions,
                categories: Some(cat_tx),
                products: Some(prod_tx),
            }
        }

        fn resolve_categories(&mut self, result: Result<Vec<Category>, FetchError>) {
            self.categories.take().unwrap().send(result).unwrap();
            self.pool.run_until_stalled();
        }

        fn resolve_products(&mut self, result: Result<Vec<Product>, FetchError>) {
            self.products.take().unwrap().send(result).unwrap();
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn test_page_waits_for_both_reads() {
        let mut h = Harness::start();
        h.pool.run_until_stalled();
        assert!(h.state.borrow().is_loading());

        h.resolve_categories(Ok(vec![category(1, "doors")]));
        assert!(h.state.borrow().is_loading());
        assert_eq!(*h.transitions.borrow(), 0);

        h.resolve_products(Ok(vec![product(10, 1, 0)]));
        assert_eq!(*h.transitions.borrow(), 1);
        let state = h.state.borrow();
        let catalog = state.data().unwrap();
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.products.len(), 1);
    }

    #[test]
    fn test_either_failure_fails_the_page() {
        let mut h = Harness::start();
        h.resolve_products(Ok(vec![product(10, 1, 0)]));
        h.resolve_categories(Err(FetchError::Network("offline".into())));

        assert_eq!(*h.transitions.borrow(), 1);
        assert!(matches!(h.state.borrow().phase(), LoadPhase::Failed(_)));
    }

    #[test]
    fn test_empty_store_is_ready_and_empty() {
        let mut h = Harness::start();
        h.resolve_categories(Ok(vec![]));
        h.resolve_products(Ok(vec![]));
        assert_eq!(
            h.state.borrow().phase(),
            &LoadPhase::Ready(Catalog::default())
        );
    }

    #[test]
    fn test_products_are_ordered_by_sort_order() {
        let catalog = futures::executor::block_on(join_catalog(
            async { Ok::<_, FetchError>(vec![category(1, "doors")]) },
            async {
                Ok::<_, FetchError>(vec![product(10, 1, 5), product(11, 1, 1), product(12, 1, 3)])
            },
        ))
        .unwrap();
        let order: Vec<i32> = catalog.products.iter().map(|p| p.sort_order).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn test_filtered_view_follows_filter() {
        let catalog = Catalog {
            categories: vec![category(1, "doors")],
            products: vec![product(10, 1, 0), product(11, 99, 1)],
        };
        assert_eq!(catalog.filtered(&CategoryFilter::All), catalog.products);
        let doors = catalog.filtered(&CategoryFilter::Slug("doors".into()));
        assert_eq!(doors.len(), 1);
        assert_eq!(doors[0].id.value(), Uuid::from_u128(10));
    }
}
