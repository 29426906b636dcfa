//! Rental-context enrichment for items.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use lendhub_core::result::AppResult;
use lendhub_database::{BookingStore, CommentStore};
use lendhub_entity::item::{Item, ItemDetails};

/// Computes an item's last and next approved bookings and attaches its
/// comments.
#[derive(Clone)]
pub struct AvailabilityService {
    bookings: Arc<dyn BookingStore>,
    comments: Arc<dyn CommentStore>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(bookings: Arc<dyn BookingStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self { bookings, comments }
    }

    /// Builds the enriched view of an item.
    ///
    /// `last` is the approved booking with the greatest start before
    /// `now`; `next` is the first approved booking starting after `last`
    /// ends (or after `now` when there is no `last`). Anchoring `next` on
    /// the end of `last` rather than on `now` keeps the two windows from
    /// overlapping when bookings are adjacent. The bookings are exposed
    /// only to the item's owner; comments are exposed to everyone.
    pub async fn attach(
        &self,
        item: Item,
        viewer_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<ItemDetails> {
        let comments = self.comments.find_by_item(item.id).await?;

        let last = self.bookings.last_approved_before(item.id, now).await?;
        let from = last.as_ref().map(|b| b.end).unwrap_or(now);
        let next = self.bookings.next_approved_after(item.id, from).await?;

        let is_owner = viewer_id == item.owner_id;
        Ok(ItemDetails {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            last_booking: if is_owner { last } else { None },
            next_booking: if is_owner { next } else { None },
            comments,
        })
    }
}
