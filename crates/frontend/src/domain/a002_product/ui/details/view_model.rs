use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::errors::FetchError;
use leptos::prelude::*;

use crate::domain::a002_product::api::fetch_product_by_slug;
use crate::shared::state::PageState;
use crate::shared::StoreClient;

/// ViewModel for the product detail page.
///
/// Data is `None` when no product has the slug; the selection is the image
/// shown large.
#[derive(Clone, Copy)]
pub struct ProductDetailViewModel {
    pub page: PageState<Option<Product>, String>,
    client: StoredValue<StoreClient>,
    slug: StoredValue<String>,
}

impl ProductDetailViewModel {
    pub fn new(client: StoreClient, slug: String) -> Self {
        Self {
            page: PageState::new(),
            client: StoredValue::new(client),
            slug: StoredValue::new(slug),
        }
    }

    pub fn load(&self) {
        let client = self.client.get_value();
        let slug = self.slug.get_value();
        log::debug!("loading product '{}'", slug);
        self.page.load(
            async move {
                let product = fetch_product_by_slug(&client, &slug).await?;
                if product.is_none() {
                    log::info!("product '{}' not found", slug);
                }
                Ok::<_, FetchError>(product)
            },
            initial_image,
        );
    }

    pub fn select_image(&self, url: String) {
        self.page.select(url);
    }

    pub fn selected_image(&self) -> Option<String> {
        self.page.selection()
    }

    pub fn product(&self) -> Option<Product> {
        self.page.with_data(|data| data.cloned().flatten())
    }
}

/// The primary image is shown first, or the first gallery image without one.
pub fn initial_image(product: &Option<Product>) -> Option<String> {
    product.as_ref()?.all_images().into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::{LoadPhase, PageLoad};
    use serde_json::json;

    fn product() -> Product {
        serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-00000000000a",
            "category_id": "00000000-0000-0000-0000-000000000001",
            "name": "French Door",
            "slug": "french-door",
            "image_url": "https://img/main.jpg",
            "gallery_images": ["https://img/side.jpg"],
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_product_is_ready_not_found() {
        let mut page = PageLoad::<Option<Product>, String>::new();
        let ticket = page.begin();
        assert!(page.finish(ticket, Ok(None), initial_image));
        assert_eq!(page.phase(), &LoadPhase::Ready(None));
        assert!(page.selection().is_none());
        assert!(page.error().is_none());
    }

    #[test]
    fn test_found_product_selects_primary_image() {
        let mut page = PageLoad::<Option<Product>, String>::new();
        let ticket = page.begin();
        page.finish(ticket, Ok(Some(product())), initial_image);
        assert_eq!(page.selection().map(String::as_str), Some("https://img/main.jpg"));

        assert!(page.select("https://img/side.jpg".to_string()));
        assert!(!page.select("https://img/side.jpg".to_string()));
        assert_eq!(page.selection().map(String::as_str), Some("https://img/side.jpg"));
    }

    #[test]
    fn test_blank_primary_falls_back_to_gallery() {
        let mut blank = product();
        blank.image_url = String::new();
        assert_eq!(
            initial_image(&Some(blank)).as_deref(),
            Some("https://img/side.jpg")
        );
    }

    #[test]
    fn test_slug_change_supersedes_pending_load() {
        let mut page = PageLoad::<Option<Product>, String>::new();
        let first = page.begin();
        let second = page.begin();
        assert!(!page.finish(first, Ok(Some(product())), initial_image));
        assert!(page.finish(second, Ok(None), initial_image));
        assert_eq!(page.data(), Some(&None));
    }
}
