use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::uuid_id;
use crate::domain::common::{null_as_default, AggregateRoot};
use crate::shared::store_query::TableQuery;

// ============================================================================
// ID Type
// ============================================================================

uuid_id!(
    /// Unique identifier of a product category
    CategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category (doors, windows, kitchen...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Icon identifier understood by the frontend icon set
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_name: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    /// All categories, alphabetically
    pub fn list_query() -> TableQuery {
        TableQuery::from(Self::collection_name()).order_asc("name")
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "aluminum_categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_store_row() {
        let row = json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Doors",
            "slug": "doors",
            "description": null,
            "icon_name": "door-open",
            "created_at": "2024-05-01T10:00:00.123456+00:00"
        });
        let category: Category = serde_json::from_value(row).unwrap();
        assert_eq!(category.slug, "doors");
        assert_eq!(category.description, "");
        assert_eq!(category.icon_name, "door-open");
        assert!(category.created_at.is_some());
    }

    #[test]
    fn test_list_query_orders_by_name() {
        assert_eq!(
            Category::list_query().to_query_string(),
            "select=*&order=name.asc"
        );
        assert_eq!(Category::list_query().table(), "aluminum_categories");
    }
}
