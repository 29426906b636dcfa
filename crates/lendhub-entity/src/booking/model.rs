//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// A time-bounded booking request for an item.
///
/// Invariants: `start < end`; a booking is created WAITING and mutated
/// only through the status-transition operation; bookings are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The booked item.
    pub item_id: Uuid,
    /// The user who placed the booking.
    pub booker_id: Uuid,
    /// Rental window start.
    #[sqlx(rename = "start_date")]
    pub start: DateTime<Utc>,
    /// Rental window end.
    #[sqlx(rename = "end_date")]
    pub end: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: BookingStatus,
}

/// Data required to persist a new booking. Stored bookings start WAITING.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub item_id: Uuid,
    pub booker_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
