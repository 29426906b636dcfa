//! Comment creation behind the eligibility gate.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_database::{BookingStore, CommentStore, ItemStore, UserStore};
use lendhub_entity::item::{Comment, CreateComment};

use crate::context::RequestContext;

/// Gates and persists item comments.
pub struct CommentService {
    bookings: Arc<dyn BookingStore>,
    items: Arc<dyn ItemStore>,
    users: Arc<dyn UserStore>,
    comments: Arc<dyn CommentStore>,
}

/// Request to leave a comment on an item.
#[derive(Debug, Clone)]
pub struct CreateCommentRequest {
    /// Comment body.
    pub text: String,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        items: Arc<dyn ItemStore>,
        users: Arc<dyn UserStore>,
        comments: Arc<dyn CommentStore>,
    ) -> Self {
        Self {
            bookings,
            items,
            users,
            comments,
        }
    }

    /// Adds a comment to an item.
    ///
    /// The eligibility gate runs first: the acting user must have at
    /// least one booking of this item whose end lies in the past. Only
    /// the rental window is consulted, not the booking status.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        item_id: Uuid,
        req: CreateCommentRequest,
    ) -> AppResult<Comment> {
        let eligible = self
            .bookings
            .has_finished_booking(ctx.user_id, item_id, ctx.request_time)
            .await?;
        if !eligible {
            return Err(AppError::not_eligible(
                "User has no finished booking of this item",
            ));
        }

        let author = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", ctx.user_id)))?;
        let item = self
            .items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {item_id} not found")))?;

        let comment = self
            .comments
            .create(&CreateComment {
                item_id: item.id,
                author_id: author.id,
                author_name: author.name.clone(),
                text: req.text,
                created: ctx.request_time,
            })
            .await?;

        info!(
            comment_id = %comment.id,
            item_id = %item.id,
            author_id = %author.id,
            "Comment added"
        );

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendhub_core::error::ErrorKind;
    use lendhub_entity::booking::BookingStatus;

    use crate::testing::Fixture;

    fn text(body: &str) -> CreateCommentRequest {
        CreateCommentRequest { text: body.into() }
    }

    #[tokio::test]
    async fn test_comment_after_finished_rental() {
        let fx = Fixture::new().await;
        let booking = fx.add_booking(fx.item.id, fx.booker.id, -3, -2).await;
        fx.bookings
            .update_status(booking.id, BookingStatus::Approved, BookingStatus::Waiting)
            .await
            .unwrap();

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let comment = fx
            .comment_service
            .add_comment(&ctx, fx.item.id, text("solid tool"))
            .await
            .unwrap();

        assert_eq!(comment.item_id, fx.item.id);
        assert_eq!(comment.author_id, fx.booker.id);
        assert_eq!(comment.author_name, fx.booker.name);
        assert_eq!(comment.created, fx.now);
    }

    #[tokio::test]
    async fn test_never_rented_is_not_eligible() {
        let fx = Fixture::new().await;

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let err = fx
            .comment_service
            .add_comment(&ctx, fx.item.id, text("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotEligible);
    }

    #[tokio::test]
    async fn test_ongoing_rental_is_not_eligible() {
        let fx = Fixture::new().await;
        let booking = fx.add_booking(fx.item.id, fx.booker.id, -1, 1).await;
        fx.bookings
            .update_status(booking.id, BookingStatus::Approved, BookingStatus::Waiting)
            .await
            .unwrap();

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let err = fx
            .comment_service
            .add_comment(&ctx, fx.item.id, text("too early"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotEligible);
    }

    // The gate only looks at the rental window: an elapsed WAITING
    // booking that was never approved still grants eligibility.
    #[tokio::test]
    async fn test_waiting_booking_still_grants_eligibility() {
        let fx = Fixture::new().await;
        fx.add_booking(fx.item.id, fx.booker.id, -3, -2).await;

        let ctx = RequestContext::at(fx.booker.id, fx.now);
        let comment = fx
            .comment_service
            .add_comment(&ctx, fx.item.id, text("never even approved"))
            .await
            .unwrap();
        assert_eq!(comment.author_id, fx.booker.id);
    }

    // The gate runs before existence checks, so an unknown user reads as
    // not eligible rather than not found.
    #[tokio::test]
    async fn test_gate_precedes_existence_checks() {
        let fx = Fixture::new().await;

        let ghost = RequestContext::at(Uuid::new_v4(), fx.now);
        let err = fx
            .comment_service
            .add_comment(&ghost, fx.item.id, text("ghost"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotEligible);
    }
}
