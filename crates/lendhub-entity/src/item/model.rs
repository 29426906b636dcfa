//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::booking::Booking;
use crate::item::comment::Comment;

/// An item offered for rental.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// The user who owns this item. Immutable after creation.
    pub owner_id: Uuid,
    /// Short item name.
    pub name: String,
    /// Longer free-form description.
    pub description: String,
    /// Whether the item is currently open for booking.
    pub available: bool,
    /// When the item was listed.
    pub created_at: DateTime<Utc>,
}

/// Data required to list a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
}

/// Partial update of an existing item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// An item enriched with its rental context.
///
/// `last_booking` and `next_booking` are populated only when the viewer is
/// the item's owner; comments are visible to everyone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetails {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Most recent approved booking that has already started.
    pub last_booking: Option<Booking>,
    /// Nearest approved booking starting after the last one ends.
    pub next_booking: Option<Booking>,
    /// All comments left on this item.
    pub comments: Vec<Comment>,
}
