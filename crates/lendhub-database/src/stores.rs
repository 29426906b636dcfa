//! Store traits consumed by the service layer.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory implementation in [`crate::memory`]. Services depend
//! only on these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use lendhub_core::result::AppResult;
use lendhub_core::types::pagination::PageRequest;
use lendhub_entity::booking::{Booking, BookingState, BookingStatus, CreateBooking};
use lendhub_entity::item::{Comment, CreateComment, CreateItem, Item};
use lendhub_entity::user::{CreateUser, User};

/// Which side of the booking relationship a list query runs for.
///
/// One parameterized query serves both perspectives instead of a
/// per-subject family of query methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSubject {
    /// Bookings placed by this user.
    Booker(Uuid),
    /// Bookings of items owned by this user.
    Owner(Uuid),
}

/// User persistence operations.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user and return it with its assigned id.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Overwrite the stored user with the given state.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Delete a user by id. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users in creation order.
    async fn find_all(&self) -> AppResult<Vec<User>>;
}

/// Item persistence operations.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Persist a new item and return it with its assigned id.
    async fn create(&self, data: &CreateItem) -> AppResult<Item>;

    /// Overwrite the stored item with the given state.
    async fn update(&self, item: &Item) -> AppResult<Item>;

    /// Delete an item by id. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Find an item by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// List a user's items in creation order.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Item>>;

    /// Case-insensitive text search over name and description of
    /// available items.
    async fn search_available(&self, text: &str) -> AppResult<Vec<Item>>;
}

/// Booking persistence and temporal-query operations.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// Persist a new booking with status WAITING and return it.
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking>;

    /// Find a booking by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// List bookings for a subject within one state partition.
    ///
    /// `now` is the instant temporal partitions are evaluated against;
    /// callers capture it once per logical operation. Results are ordered
    /// by `start` descending, except CURRENT which is ordered by `end`
    /// descending.
    async fn find_for_subject(
        &self,
        subject: BookingSubject,
        state: BookingState,
        now: DateTime<Utc>,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>>;

    /// Compare-and-set the booking status.
    ///
    /// The write only happens while the stored status still equals
    /// `expected`; returns `None` when the precondition no longer holds,
    /// so concurrent approve/reject calls on the same booking cannot both
    /// win.
    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        expected: BookingStatus,
    ) -> AppResult<Option<Booking>>;

    /// The approved booking of the item with the greatest `start` before
    /// `now`; ties broken by highest booking id.
    async fn last_approved_before(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>>;

    /// The approved booking of the item with the smallest `start` after
    /// `after`.
    async fn next_approved_after(
        &self,
        item_id: Uuid,
        after: DateTime<Utc>,
    ) -> AppResult<Option<Booking>>;

    /// Whether the booker has at least one booking of the item whose end
    /// lies before `now`. Booking status is deliberately not part of the
    /// predicate.
    async fn has_finished_booking(
        &self,
        booker_id: Uuid,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<bool>;
}

/// Comment persistence operations.
#[async_trait]
pub trait CommentStore: Send + Sync + 'static {
    /// Persist a new comment and return it with its assigned id.
    async fn create(&self, data: &CreateComment) -> AppResult<Comment>;

    /// List an item's comments in creation order.
    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<Comment>>;
}
