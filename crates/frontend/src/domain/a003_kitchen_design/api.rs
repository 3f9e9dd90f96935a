use contracts::domain::a003_kitchen_design::aggregate::KitchenDesign;
use contracts::shared::errors::FetchError;

use crate::shared::StoreClient;

/// All kitchen designs ordered by `sort_order`
pub async fn fetch_kitchen_designs(client: &StoreClient) -> Result<Vec<KitchenDesign>, FetchError> {
    client.select(&KitchenDesign::list_query()).await
}
