use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::errors::FetchError;

use crate::shared::StoreClient;

/// All products ordered by `sort_order`
pub async fn fetch_products(client: &StoreClient) -> Result<Vec<Product>, FetchError> {
    client.select(&Product::list_query()).await
}

/// The product with `slug`, or `None` when no row matches
pub async fn fetch_product_by_slug(
    client: &StoreClient,
    slug: &str,
) -> Result<Option<Product>, FetchError> {
    client.select_one(&Product::by_slug_query(slug)).await
}
