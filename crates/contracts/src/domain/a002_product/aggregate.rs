use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_category::aggregate::CategoryId;
use crate::domain::common::aggregate_id::uuid_id;
use crate::domain::common::{null_as_default, AggregateRoot, Sequenced};
use crate::shared::store_query::TableQuery;

// ============================================================================
// ID Type
// ============================================================================

uuid_id!(
    /// Unique identifier of a product
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Must resolve to an existing category for category filtering to see it
    pub category_id: CategoryId,

    pub name: String,
    pub slug: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub long_description: String,

    /// Free text such as "$450 - $1,200"
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_range: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,

    /// Specification name -> value
    #[serde(default, deserialize_with = "null_as_default")]
    pub specifications: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery_images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// All products in display order
    pub fn list_query() -> TableQuery {
        TableQuery::from(Self::collection_name()).order_asc("sort_order")
    }

    /// At most one product with the given slug
    pub fn by_slug_query(slug: &str) -> TableQuery {
        TableQuery::from(Self::collection_name())
            .eq("slug", slug)
            .limit(1)
    }

    /// Primary image followed by the gallery.
    ///
    /// Empty URLs are skipped and each URL appears once, at its first
    /// position, since the image strip selects by URL.
    pub fn all_images(&self) -> Vec<String> {
        let mut images: Vec<String> = Vec::with_capacity(self.gallery_images.len() + 1);
        for url in std::iter::once(&self.image_url).chain(&self.gallery_images) {
            if !url.is_empty() && !images.contains(url) {
                images.push(url.clone());
            }
        }
        images
    }

    /// First `n` features, for compact cards
    pub fn feature_preview(&self, n: usize) -> &[String] {
        &self.features[..self.features.len().min(n)]
    }
}

impl Sequenced for Product {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "aluminum_products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-00000000000a",
            "category_id": "00000000-0000-0000-0000-000000000001",
            "name": "Sliding Patio Door",
            "slug": "sliding-patio-door",
            "description": "Slim frames, wide views.",
            "long_description": "Thermally broken aluminum sliding door.",
            "price_range": "$1,200 - $3,500",
            "image_url": "https://img/door.jpg",
            "features": ["Low-E glass", "Multi-point lock", "Powder coat", "Soft close"],
            "specifications": {"Frame": "6063-T5", "Glass": "Double glazed"},
            "gallery_images": ["https://img/door-2.jpg", "https://img/door-3.jpg"],
            "is_featured": true,
            "sort_order": 3,
            "created_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_full_row() {
        let product = sample();
        assert_eq!(product.slug, "sliding-patio-door");
        assert!(product.is_featured);
        assert_eq!(product.specifications.get("Frame").map(String::as_str), Some("6063-T5"));
        assert_eq!(product.sort_order, 3);
    }

    #[test]
    fn test_deserialize_sparse_row() {
        let product: Product = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-00000000000b",
            "category_id": "00000000-0000-0000-0000-000000000063",
            "name": "Awning Window",
            "slug": "awning-window",
            "features": null,
            "specifications": null,
            "gallery_images": null,
            "is_featured": null
        }))
        .unwrap();
        assert!(product.features.is_empty());
        assert!(product.specifications.is_empty());
        assert!(product.gallery_images.is_empty());
        assert!(!product.is_featured);
        assert!(product.all_images().is_empty());
    }

    #[test]
    fn test_all_images_starts_with_primary() {
        assert_eq!(
            sample().all_images(),
            vec![
                "https://img/door.jpg".to_string(),
                "https://img/door-2.jpg".to_string(),
                "https://img/door-3.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_images_skips_repeats_and_blanks() {
        let mut product = sample();
        product.gallery_images = vec![
            "https://img/door-2.jpg".into(),
            "https://img/door.jpg".into(),
            String::new(),
            "https://img/door-2.jpg".into(),
        ];
        assert_eq!(
            product.all_images(),
            vec!["https://img/door.jpg".to_string(), "https://img/door-2.jpg".to_string()]
        );

        product.image_url = String::new();
        assert_eq!(product.all_images(), vec!["https://img/door-2.jpg".to_string()]);
    }

    #[test]
    fn test_feature_preview_caps_length() {
        let product = sample();
        assert_eq!(product.feature_preview(3).len(), 3);
        assert_eq!(product.feature_preview(10).len(), 4);
    }

    #[test]
    fn test_queries() {
        assert_eq!(
            Product::list_query().to_query_string(),
            "select=*&order=sort_order.asc"
        );
        assert_eq!(
            Product::by_slug_query("sliding-patio-door").to_query_string(),
            "select=*&slug=eq.sliding-patio-door&limit=1"
        );
    }
}
