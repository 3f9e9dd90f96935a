use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::uuid_id;
use crate::domain::common::{null_as_default, AggregateRoot, Sequenced};
use crate::shared::store_query::TableQuery;

// ============================================================================
// ID Type
// ============================================================================

uuid_id!(
    /// Unique identifier of a kitchen layout
    KitchenDesignId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Kitchen layout offered by the workshop (L-shape, galley, island...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenDesign {
    pub id: KitchenDesignId,
    pub name: String,
    pub slug: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,

    /// Free text such as "3.0m x 2.4m"
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimensions: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery_images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub advantages: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl KitchenDesign {
    /// All designs in display order
    pub fn list_query() -> TableQuery {
        TableQuery::from(Self::collection_name()).order_asc("sort_order")
    }
}

impl Sequenced for KitchenDesign {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl AggregateRoot for KitchenDesign {
    type Id = KitchenDesignId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "aluminum_kitchen_designs"
    }

    fn element_name() -> &'static str {
        "Kitchen design"
    }

    fn list_name() -> &'static str {
        "Kitchen designs"
    }
}
