//! Item CRUD and search.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_database::{ItemStore, UserStore};
use lendhub_entity::item::{CreateItem, Item, ItemDetails};

use super::availability::AvailabilityService;
use crate::context::RequestContext;

/// Manages item listing, updates, lookup, and search.
pub struct ItemService {
    items: Arc<dyn ItemStore>,
    users: Arc<dyn UserStore>,
    availability: AvailabilityService,
}

/// Request to list a new item.
#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: String,
    pub available: bool,
}

/// Partial update of an existing item.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(
        items: Arc<dyn ItemStore>,
        users: Arc<dyn UserStore>,
        availability: AvailabilityService,
    ) -> Self {
        Self {
            items,
            users,
            availability,
        }
    }

    /// The availability aggregator backing this service.
    pub fn availability(&self) -> &AvailabilityService {
        &self.availability
    }

    async fn find_item(&self, id: Uuid) -> AppResult<Item> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Lists a new item owned by the acting user.
    pub async fn create(&self, ctx: &RequestContext, req: CreateItemRequest) -> AppResult<Item> {
        let owner = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", ctx.user_id)))?;

        let item = self
            .items
            .create(&CreateItem {
                owner_id: owner.id,
                name: req.name,
                description: req.description,
                available: req.available,
            })
            .await?;

        info!(item_id = %item.id, owner_id = %owner.id, "Item created");
        Ok(item)
    }

    /// Partially updates an item. Only the owner may update; anyone else
    /// gets an opaque not-found. Blank names or descriptions are
    /// rejected.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        item_id: Uuid,
        req: UpdateItemRequest,
    ) -> AppResult<Item> {
        let mut item = self.find_item(item_id).await?;
        if item.owner_id != ctx.user_id {
            return Err(AppError::not_found(format!("Item {item_id} not found")));
        }

        if let Some(name) = req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Item name must not be blank"));
            }
            item.name = name;
        }
        if let Some(description) = req.description {
            if description.trim().is_empty() {
                return Err(AppError::validation("Item description must not be blank"));
            }
            item.description = description;
        }
        if let Some(available) = req.available {
            item.available = available;
        }

        let item = self.items.update(&item).await?;
        info!(item_id = %item.id, "Item updated");
        Ok(item)
    }

    /// Deletes an item.
    pub async fn delete(&self, item_id: Uuid) -> AppResult<()> {
        if !self.items.delete(item_id).await? {
            return Err(AppError::not_found(format!("Item {item_id} not found")));
        }
        info!(item_id = %item_id, "Item deleted");
        Ok(())
    }

    /// Fetches one item enriched with rental context for the viewer.
    pub async fn get_by_id(&self, ctx: &RequestContext, item_id: Uuid) -> AppResult<ItemDetails> {
        let item = self.find_item(item_id).await?;
        self.availability
            .attach(item, ctx.user_id, ctx.request_time)
            .await
    }

    /// Lists the acting user's items, each enriched with rental context.
    pub async fn list_own(&self, ctx: &RequestContext) -> AppResult<Vec<ItemDetails>> {
        let items = self.items.find_by_owner(ctx.user_id).await?;
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(
                self.availability
                    .attach(item, ctx.user_id, ctx.request_time)
                    .await?,
            );
        }
        Ok(details)
    }

    /// Searches available items by name or description. An empty query
    /// returns an empty list without touching the store.
    pub async fn search(&self, text: &str) -> AppResult<Vec<Item>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.items.search_available(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendhub_core::error::ErrorKind;

    use crate::testing::Fixture;

    #[tokio::test]
    async fn test_create_assigns_acting_user_as_owner() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.owner.id, fx.now);

        let item = fx
            .item_service
            .create(
                &ctx,
                CreateItemRequest {
                    name: "saw".into(),
                    description: "hand saw".into(),
                    available: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(item.owner_id, fx.owner.id);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_opaque() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.booker.id, fx.now);

        let err = fx
            .item_service
            .update(
                &ctx,
                fx.item.id,
                UpdateItemRequest {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.owner.id, fx.now);

        let err = fx
            .item_service
            .update(
                &ctx,
                fx.item.id,
                UpdateItemRequest {
                    name: Some("   ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.owner.id, fx.now);

        let updated = fx
            .item_service
            .update(
                &ctx,
                fx.item.id,
                UpdateItemRequest {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, fx.item.name);
        assert_eq!(updated.description, fx.item.description);
        assert!(!updated.available);
    }

    #[tokio::test]
    async fn test_search_empty_text_returns_nothing() {
        let fx = Fixture::new().await;
        assert!(fx.item_service.search("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_case_insensitively_on_available_items() {
        let fx = Fixture::new().await;
        fx.add_item(fx.owner.id, "Bench Grinder", true).await;
        fx.add_item(fx.owner.id, "Angle grinder", false).await;

        let found = fx.item_service.search("GRINDER").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bench Grinder");
    }
}
