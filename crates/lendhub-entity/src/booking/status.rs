//! Booking status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use lendhub_core::AppError;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Created, awaiting the owner's decision.
    Waiting,
    /// Approved by the item's owner.
    Approved,
    /// Rejected by the item's owner.
    Rejected,
}

impl BookingStatus {
    /// Resolve the status an approve/reject decision transitions into.
    ///
    /// Re-asserting the current terminal status is an error; every other
    /// transition is allowed, including flipping an APPROVED booking to
    /// REJECTED and back (owner re-evaluation).
    pub fn transition(self, approve: bool) -> Result<BookingStatus, AppError> {
        match (self, approve) {
            (Self::Approved, true) => {
                Err(AppError::invalid_transition("Booking is already approved"))
            }
            (Self::Rejected, false) => {
                Err(AppError::invalid_transition("Booking is already rejected"))
            }
            (_, true) => Ok(Self::Approved),
            (_, false) => Ok(Self::Rejected),
        }
    }

    /// Return the status as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
