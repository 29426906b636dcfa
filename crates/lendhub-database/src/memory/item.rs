//! In-memory item store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_entity::item::{CreateItem, Item};

use crate::stores::ItemStore;

/// DashMap-backed [`ItemStore`].
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: DashMap<Uuid, Item>,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the given item, if the item exists. Used by the booking
    /// store to resolve the owner-items subject.
    pub(crate) fn owner_of(&self, item_id: Uuid) -> Option<Uuid> {
        self.items.get(&item_id).map(|i| i.owner_id)
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        let item = Item {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            name: data.name.clone(),
            description: data.description.clone(),
            available: data.available,
            created_at: Utc::now(),
        };
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item) -> AppResult<Item> {
        if !self.items.contains_key(&item.id) {
            return Err(AppError::not_found(format!("Item {} not found", item.id)));
        }
        self.items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.items.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        Ok(self.items.get(&id).map(|i| i.value().clone()))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|i| i.created_at);
        Ok(items)
    }

    async fn search_available(&self, text: &str) -> AppResult<Vec<Item>> {
        let needle = text.to_lowercase();
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| {
                entry.available
                    && (entry.name.to_lowercase().contains(&needle)
                        || entry.description.to_lowercase().contains(&needle))
            })
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|i| i.created_at);
        Ok(items)
    }
}
