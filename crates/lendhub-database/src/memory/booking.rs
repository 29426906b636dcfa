//! In-memory booking store.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use lendhub_core::result::AppResult;
use lendhub_core::types::pagination::PageRequest;
use lendhub_entity::booking::{Booking, BookingState, BookingStatus, CreateBooking};

use crate::memory::MemoryItemStore;
use crate::stores::{BookingStore, BookingSubject};

/// DashMap-backed [`BookingStore`].
///
/// Holds a reference to the item store to resolve the owner-items
/// subject, the way the SQL implementation joins through `items`.
#[derive(Debug)]
pub struct MemoryBookingStore {
    bookings: DashMap<Uuid, Booking>,
    items: Arc<MemoryItemStore>,
}

impl MemoryBookingStore {
    /// Create an empty store over the given item store.
    pub fn new(items: Arc<MemoryItemStore>) -> Self {
        Self {
            bookings: DashMap::new(),
            items,
        }
    }

    fn matches_subject(&self, booking: &Booking, subject: BookingSubject) -> bool {
        match subject {
            BookingSubject::Booker(id) => booking.booker_id == id,
            BookingSubject::Owner(id) => self.items.owner_of(booking.item_id) == Some(id),
        }
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let booking = Booking {
            id: Uuid::new_v4(),
            item_id: data.item_id,
            booker_id: data.booker_id,
            start: data.start,
            end: data.end,
            status: BookingStatus::Waiting,
        };
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.value().clone()))
    }

    async fn find_for_subject(
        &self,
        subject: BookingSubject,
        state: BookingState,
        now: DateTime<Utc>,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|entry| self.matches_subject(entry.value(), subject))
            .filter(|entry| match state {
                BookingState::All => true,
                BookingState::Past => entry.end < now,
                BookingState::Current => entry.start < now && entry.end > now,
                BookingState::Future => entry.start > now,
                BookingState::Waiting => entry.status == BookingStatus::Waiting,
                BookingState::Rejected => entry.status == BookingStatus::Rejected,
            })
            .map(|entry| entry.value().clone())
            .collect();

        // CURRENT orders by end, soonest-ending first.
        match state {
            BookingState::Current => bookings.sort_by_key(|b| Reverse(b.end)),
            _ => bookings.sort_by_key(|b| Reverse(b.start)),
        }

        Ok(bookings
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        expected: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        // The entry guard keeps the compare-and-set atomic per booking.
        match self.bookings.get_mut(&id) {
            Some(mut entry) if entry.status == expected => {
                entry.status = status;
                Ok(Some(entry.value().clone()))
            }
            _ => Ok(None),
        }
    }

    async fn last_approved_before(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|entry| {
                entry.item_id == item_id
                    && entry.status == BookingStatus::Approved
                    && entry.start < now
            })
            .map(|entry| entry.value().clone())
            .max_by_key(|b| (b.start, b.id)))
    }

    async fn next_approved_after(
        &self,
        item_id: Uuid,
        after: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|entry| {
                entry.item_id == item_id
                    && entry.status == BookingStatus::Approved
                    && entry.start > after
            })
            .map(|entry| entry.value().clone())
            .min_by_key(|b| (b.start, b.id)))
    }

    async fn has_finished_booking(
        &self,
        booker_id: Uuid,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        Ok(self.bookings.iter().any(|entry| {
            entry.booker_id == booker_id && entry.item_id == item_id && entry.end < now
        }))
    }
}
