//! Booking lifecycle and temporal queries.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_core::types::pagination::PageRequest;
use lendhub_database::{BookingStore, BookingSubject, ItemStore, UserStore};
use lendhub_entity::booking::{Booking, BookingState, CreateBooking};
use lendhub_entity::item::Item;
use lendhub_entity::user::User;

use crate::context::RequestContext;

/// Manages booking creation, status transitions, single-booking reads,
/// and the partitioned list queries for both perspectives.
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    items: Arc<dyn ItemStore>,
    users: Arc<dyn UserStore>,
}

/// Request to place a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingRequest {
    /// The item to book.
    pub item_id: Uuid,
    /// Rental window start.
    pub start: DateTime<Utc>,
    /// Rental window end.
    pub end: DateTime<Utc>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        items: Arc<dyn ItemStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            bookings,
            items,
            users,
        }
    }

    async fn find_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn find_item(&self, id: Uuid) -> AppResult<Item> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    async fn find_booking(&self, id: Uuid) -> AppResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Places a new booking. The stored record starts WAITING.
    ///
    /// Precondition order is part of the contract: range, booker
    /// existence, item existence, item availability, self-booking.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateBookingRequest,
    ) -> AppResult<Booking> {
        if req.start >= req.end {
            return Err(AppError::invalid_range("Booking end must be after its start"));
        }
        let booker = self.find_user(ctx.user_id).await?;
        let item = self.find_item(req.item_id).await?;
        if !item.available {
            return Err(AppError::item_unavailable(format!(
                "Item {} is not available for booking",
                item.id
            )));
        }
        if item.owner_id == booker.id {
            // Rendered as not-found so probing cannot reveal ownership.
            return Err(AppError::not_found("Owners cannot book their own items"));
        }

        let booking = self
            .bookings
            .create(&CreateBooking {
                item_id: item.id,
                booker_id: booker.id,
                start: req.start,
                end: req.end,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            item_id = %item.id,
            booker_id = %booker.id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Approves or rejects a booking. Only the owner of the booked item
    /// may decide; anyone else gets an opaque not-found.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
        approve: bool,
    ) -> AppResult<Booking> {
        let user = self.find_user(ctx.user_id).await?;
        let booking = self.find_booking(booking_id).await?;
        let item = self.find_item(booking.item_id).await?;
        if item.owner_id != user.id {
            return Err(AppError::not_found(format!(
                "Booking {booking_id} not found"
            )));
        }

        let next = booking.status.transition(approve)?;
        let updated = self
            .bookings
            .update_status(booking.id, next, booking.status)
            .await?
            // The stored status moved between our read and the write.
            .ok_or_else(|| {
                AppError::invalid_transition("Booking status changed concurrently")
            })?;

        info!(
            booking_id = %updated.id,
            status = %updated.status,
            "Booking status updated"
        );

        Ok(updated)
    }

    /// Fetches one booking, visible only to its booker or the owner of
    /// the booked item.
    pub async fn get_by_id(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<Booking> {
        let user = self.find_user(ctx.user_id).await?;
        let booking = self.find_booking(booking_id).await?;
        let item = self.find_item(booking.item_id).await?;
        if booking.booker_id != user.id && item.owner_id != user.id {
            return Err(AppError::not_found(format!(
                "Booking {booking_id} not found"
            )));
        }
        Ok(booking)
    }

    /// Lists the acting user's own bookings within one state partition.
    ///
    /// `state` is the raw filter keyword; classification happens after
    /// the user existence check, so an unknown user wins over an unknown
    /// keyword.
    pub async fn list_for_booker(
        &self,
        ctx: &RequestContext,
        state: &str,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let user = self.find_user(ctx.user_id).await?;
        let state: BookingState = state.parse()?;
        self.bookings
            .find_for_subject(
                BookingSubject::Booker(user.id),
                state,
                ctx.request_time,
                page,
            )
            .await
    }

    /// Lists bookings of the acting user's items within one state
    /// partition.
    pub async fn list_for_owner_items(
        &self,
        ctx: &RequestContext,
        state: &str,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let user = self.find_user(ctx.user_id).await?;
        let state: BookingState = state.parse()?;
        self.bookings
            .find_for_subject(
                BookingSubject::Owner(user.id),
                state,
                ctx.request_time,
                page,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lendhub_core::error::ErrorKind;
    use lendhub_entity::booking::BookingStatus;

    use crate::testing::Fixture;

    fn request(item_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> CreateBookingRequest {
        CreateBookingRequest {
            item_id,
            start,
            end,
        }
    }

    #[tokio::test]
    async fn test_create_starts_waiting() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.booker.id, fx.now);

        let booking = fx
            .booking_service
            .create(
                &ctx,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(1),
                    fx.now + Duration::hours(2),
                ),
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.booker_id, fx.booker.id);
        assert_eq!(booking.item_id, fx.item.id);
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_range() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.booker.id, fx.now);

        let err = fx
            .booking_service
            .create(
                &ctx,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(2),
                    fx.now + Duration::hours(1),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);

        // Equal endpoints are just as invalid.
        let err = fx
            .booking_service
            .create(
                &ctx,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(1),
                    fx.now + Duration::hours(1),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);
    }

    // The range check runs before user resolution, so an unknown user
    // with an inverted range still sees InvalidRange.
    #[tokio::test]
    async fn test_create_precondition_order() {
        let fx = Fixture::new().await;
        let ghost = RequestContext::at(Uuid::new_v4(), fx.now);

        let err = fx
            .booking_service
            .create(
                &ghost,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(2),
                    fx.now + Duration::hours(1),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRange);

        let err = fx
            .booking_service
            .create(
                &ghost,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(1),
                    fx.now + Duration::hours(2),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_create_rejects_unavailable_item() {
        let fx = Fixture::new().await;
        let hidden = fx.add_item(fx.owner.id, "ladder", false).await;
        let ctx = RequestContext::at(fx.booker.id, fx.now);

        let err = fx
            .booking_service
            .create(
                &ctx,
                request(
                    hidden.id,
                    fx.now + Duration::hours(1),
                    fx.now + Duration::hours(2),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ItemUnavailable);
    }

    #[tokio::test]
    async fn test_self_booking_is_opaque_not_found() {
        let fx = Fixture::new().await;
        let ctx = RequestContext::at(fx.owner.id, fx.now);

        let err = fx
            .booking_service
            .create(
                &ctx,
                request(
                    fx.item.id,
                    fx.now + Duration::hours(1),
                    fx.now + Duration::hours(2),
                ),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_status_approve_then_reapprove_fails() {
        let fx = Fixture::new().await;
        let booking = fx.add_booking(fx.item.id, fx.booker.id, 1, 2).await;
        let owner_ctx = RequestContext::at(fx.owner.id, fx.now);

        let approved = fx
            .booking_service
            .update_status(&owner_ctx, booking.id, true)
            .await
            .unwrap();
        assert_eq!(approved.status, BookingStatus::Approved);

        let err = fx
            .booking_service
            .update_status(&owner_ctx, booking.id, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);

        // The opposite flip is allowed.
        let rejected = fx
            .booking_service
            .update_status(&owner_ctx, booking.id, false)
            .await
            .unwrap();
        assert_eq!(rejected.status, BookingStatus::Rejected);
    }

    #[tokio::test]
    async fn test_update_status_by_non_owner_is_opaque() {
        let fx = Fixture::new().await;
        let booking = fx.add_booking(fx.item.id, fx.booker.id, 1, 2).await;

        // Neither the booker nor an unrelated user may decide.
        let booker_ctx = RequestContext::at(fx.booker.id, fx.now);
        let err = fx
            .booking_service
            .update_status(&booker_ctx, booking.id, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let stranger = fx.add_user("stranger", "stranger@example.com").await;
        let stranger_ctx = RequestContext::at(stranger.id, fx.now);
        let err = fx
            .booking_service
            .update_status(&stranger_ctx, booking.id, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_by_id_visibility() {
        let fx = Fixture::new().await;
        let booking = fx.add_booking(fx.item.id, fx.booker.id, 1, 2).await;

        let booker_ctx = RequestContext::at(fx.booker.id, fx.now);
        let fetched = fx
            .booking_service
            .get_by_id(&booker_ctx, booking.id)
            .await
            .unwrap();
        assert_eq!(fetched.id, booking.id);
        assert_eq!(fetched.start, booking.start);
        assert_eq!(fetched.end, booking.end);

        let owner_ctx = RequestContext::at(fx.owner.id, fx.now);
        assert!(
            fx.booking_service
                .get_by_id(&owner_ctx, booking.id)
                .await
                .is_ok()
        );

        let stranger = fx.add_user("stranger", "stranger@example.com").await;
        let stranger_ctx = RequestContext::at(stranger.id, fx.now);
        let err = fx
            .booking_service
            .get_by_id(&stranger_ctx, booking.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_waiting_filters_status_and_orders_by_start_desc() {
        let fx = Fixture::new().await;
        let early = fx.add_booking(fx.item.id, fx.booker.id, 1, 2).await;
        let late = fx.add_booking(fx.item.id, fx.booker.id, 5, 6).await;
        let decided = fx.add_booking(fx.item.id, fx.booker.id, 3, 4).await;

        let owner_ctx = RequestContext::at(fx.owner.id, fx.now);
        fx.booking_service
            .update_status(&owner_ctx, decided.id, false)
            .await
            .unwrap();

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let waiting = fx
            .booking_service
            .list_for_booker(&ctx, "WAITING", &PageRequest::default())
            .await
            .unwrap();
        let ids: Vec<Uuid> = waiting.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![late.id, early.id]);

        let rejected = fx
            .booking_service
            .list_for_booker(&ctx, "REJECTED", &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].id, decided.id);
    }

    #[tokio::test]
    async fn test_list_current_orders_by_end_desc() {
        let fx = Fixture::new().await;
        // Both current; the one ending later must come first.
        let short = fx.add_booking(fx.item.id, fx.booker.id, -2, 1).await;
        let long = fx.add_booking(fx.item.id, fx.booker.id, -1, 3).await;

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let current = fx
            .booking_service
            .list_for_booker(&ctx, "CURRENT", &PageRequest::default())
            .await
            .unwrap();
        let ids: Vec<Uuid> = current.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![long.id, short.id]);

        // Same ordering rule holds for the owner perspective.
        let owner_ctx = RequestContext::at(fx.owner.id, fx.now);
        let current = fx
            .booking_service
            .list_for_owner_items(&owner_ctx, "CURRENT", &PageRequest::default())
            .await
            .unwrap();
        let ids: Vec<Uuid> = current.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![long.id, short.id]);
    }

    #[tokio::test]
    async fn test_list_unknown_state_fails_after_user_check() {
        let fx = Fixture::new().await;

        let ghost = RequestContext::at(Uuid::new_v4(), fx.now);
        let err = fx
            .booking_service
            .list_for_booker(&ghost, "Unknown", &PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let err = fx
            .booking_service
            .list_for_booker(&ctx, "Unknown", &PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedState);
    }

    #[tokio::test]
    async fn test_list_applies_offset_and_limit() {
        let fx = Fixture::new().await;
        for hour in 1..=5 {
            fx.add_booking(fx.item.id, fx.booker.id, hour, hour + 10)
                .await;
        }

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let page = fx
            .booking_service
            .list_for_booker(&ctx, "ALL", &PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        // Ordered by start desc, offset 1 skips the latest start.
        assert_eq!(page[0].start, fx.now + Duration::hours(4));
        assert_eq!(page[1].start, fx.now + Duration::hours(3));
    }
}
