use contracts::domain::a001_category::aggregate::Category;
use contracts::shared::errors::FetchError;

use crate::shared::StoreClient;

/// All categories ordered by name
pub async fn fetch_categories(client: &StoreClient) -> Result<Vec<Category>, FetchError> {
    client.select(&Category::list_query()).await
}
