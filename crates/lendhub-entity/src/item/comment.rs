//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment left on an item after a finished rental.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The item the comment is attached to.
    pub item_id: Uuid,
    /// The user who wrote the comment.
    pub author_id: Uuid,
    /// Author display name, captured at creation time.
    pub author_name: String,
    /// Comment body.
    pub text: String,
    /// When the comment was created.
    pub created: DateTime<Utc>,
}

/// Data required to persist a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub item_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: String,
    pub created: DateTime<Utc>,
}
