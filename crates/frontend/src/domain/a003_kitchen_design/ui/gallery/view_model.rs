use contracts::domain::a003_kitchen_design::aggregate::{KitchenDesign, KitchenDesignId};
use contracts::domain::common::order_by_sort;
use contracts::shared::errors::FetchError;
use leptos::prelude::*;

use crate::domain::a003_kitchen_design::api::fetch_kitchen_designs;
use crate::shared::state::PageState;
use crate::shared::StoreClient;

/// ViewModel for the kitchen design gallery.
#[derive(Clone, Copy)]
pub struct KitchenGalleryViewModel {
    pub page: PageState<Vec<KitchenDesign>, KitchenDesignId>,
    client: StoredValue<StoreClient>,
}

impl KitchenGalleryViewModel {
    pub fn new(client: StoreClient) -> Self {
        Self {
            page: PageState::new(),
            client: StoredValue::new(client),
        }
    }

    pub fn load(&self) {
        let client = self.client.get_value();
        self.page.load(
            async move {
                let designs = order_by_sort(fetch_kitchen_designs(&client).await?);
                log::info!("kitchen designs loaded: {}", designs.len());
                Ok::<_, FetchError>(designs)
            },
            |designs: &Vec<KitchenDesign>| initial_design(designs),
        );
    }

    pub fn select(&self, id: KitchenDesignId) {
        self.page.select(id);
    }

    pub fn designs(&self) -> Vec<KitchenDesign> {
        self.page.with_data(|d| d.cloned().unwrap_or_default())
    }

    pub fn selected_id(&self) -> Option<KitchenDesignId> {
        self.page.selection()
    }

    pub fn selected_design(&self) -> Option<KitchenDesign> {
        let id = self.selected_id()?;
        self.page
            .with_data(|d| d.and_then(|designs| designs.iter().find(|x| x.id == id).cloned()))
    }
}

/// First design in display order, if any.
pub fn initial_design(designs: &[KitchenDesign]) -> Option<KitchenDesignId> {
    designs.first().map(|d| d.id)
}
