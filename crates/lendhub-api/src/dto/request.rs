//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingBody {
    /// The item to book.
    pub item_id: Uuid,
    /// Rental window start.
    pub start: DateTime<Utc>,
    /// Rental window end.
    pub end: DateTime<Utc>,
}

/// Query of `PATCH /bookings/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveParams {
    /// `true` approves, `false` rejects.
    pub approved: bool,
}

/// Query of booking list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateParams {
    /// Booking state filter keyword (default: `ALL`).
    #[serde(default = "default_state")]
    pub state: String,
}

fn default_state() -> String {
    "ALL".to_string()
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemBody {
    pub name: String,
    pub description: String,
    pub available: bool,
}

/// Body of `PATCH /items/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Query of `GET /items/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Text matched against item names and descriptions.
    #[serde(default)]
    pub text: String,
}

/// Body of `POST /items/{id}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentBody {
    /// Comment body.
    pub text: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
}

/// Body of `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}
