//! Booking repository implementation.
//!
//! The list query is parameterized by [`BookingSubject`] and
//! [`BookingState`] instead of one hand-written method per combination;
//! the subject decides the WHERE head and the state decides the temporal
//! or status predicate plus the ordering.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_core::types::pagination::PageRequest;
use lendhub_entity::booking::{Booking, BookingState, BookingStatus, CreateBooking};

use crate::stores::{BookingStore, BookingSubject};

/// PostgreSQL-backed [`BookingStore`].
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// WHERE head for a subject. `$1` is always the subject's user id.
fn subject_clause(subject: BookingSubject) -> (&'static str, Uuid) {
    match subject {
        BookingSubject::Booker(id) => ("b.booker_id = $1", id),
        BookingSubject::Owner(id) => (
            "b.item_id IN (SELECT i.id FROM items i WHERE i.owner_id = $1)",
            id,
        ),
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (item_id, booker_id, start_date, end_date, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.item_id)
        .bind(data.booker_id)
        .bind(data.start)
        .bind(data.end)
        .bind(BookingStatus::Waiting)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    async fn find_for_subject(
        &self,
        subject: BookingSubject,
        state: BookingState,
        now: DateTime<Utc>,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let (subject_sql, subject_id) = subject_clause(subject);

        let result = match state {
            BookingState::All => {
                let sql = format!(
                    "SELECT b.* FROM bookings b WHERE {subject_sql} \
                     ORDER BY b.start_date DESC LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Booking>(&sql)
                    .bind(subject_id)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            BookingState::Past => {
                let sql = format!(
                    "SELECT b.* FROM bookings b WHERE {subject_sql} AND b.end_date < $2 \
                     ORDER BY b.start_date DESC LIMIT $3 OFFSET $4"
                );
                sqlx::query_as::<_, Booking>(&sql)
                    .bind(subject_id)
                    .bind(now)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            // CURRENT orders by end, soonest-ending first.
            BookingState::Current => {
                let sql = format!(
                    "SELECT b.* FROM bookings b WHERE {subject_sql} \
                     AND b.start_date < $2 AND b.end_date > $2 \
                     ORDER BY b.end_date DESC LIMIT $3 OFFSET $4"
                );
                sqlx::query_as::<_, Booking>(&sql)
                    .bind(subject_id)
                    .bind(now)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            BookingState::Future => {
                let sql = format!(
                    "SELECT b.* FROM bookings b WHERE {subject_sql} AND b.start_date > $2 \
                     ORDER BY b.start_date DESC LIMIT $3 OFFSET $4"
                );
                sqlx::query_as::<_, Booking>(&sql)
                    .bind(subject_id)
                    .bind(now)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            BookingState::Waiting | BookingState::Rejected => {
                let status = if state == BookingState::Waiting {
                    BookingStatus::Waiting
                } else {
                    BookingStatus::Rejected
                };
                let sql = format!(
                    "SELECT b.* FROM bookings b WHERE {subject_sql} AND b.status = $2 \
                     ORDER BY b.start_date DESC LIMIT $3 OFFSET $4"
                );
                sqlx::query_as::<_, Booking>(&sql)
                    .bind(subject_id)
                    .bind(status)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
        expected: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        // Compare-and-set: the row is only written while the status still
        // matches what the caller read.
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 AND status = $3 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(expected)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })
    }

    async fn last_approved_before(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE item_id = $1 AND status = $2 AND start_date < $3 \
             ORDER BY start_date DESC, id DESC LIMIT 1",
        )
        .bind(item_id)
        .bind(BookingStatus::Approved)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find last booking", e))
    }

    async fn next_approved_after(
        &self,
        item_id: Uuid,
        after: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE item_id = $1 AND status = $2 AND start_date > $3 \
             ORDER BY start_date ASC, id ASC LIMIT 1",
        )
        .bind(item_id)
        .bind(BookingStatus::Approved)
        .bind(after)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find next booking", e))
    }

    async fn has_finished_booking(
        &self,
        booker_id: Uuid,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookings \
             WHERE booker_id = $1 AND item_id = $2 AND end_date < $3)",
        )
        .bind(booker_id)
        .bind(item_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check finished bookings", e)
        })
    }
}
