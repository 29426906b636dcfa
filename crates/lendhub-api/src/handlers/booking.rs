//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use lendhub_service::RequestContext;
use lendhub_service::booking::CreateBookingRequest;

use crate::dto::request::{ApproveParams, CreateBookingBody, StateParams};
use crate::dto::response::BookingResponse;
use crate::error::ApiError;
use crate::extractors::{ActingUser, PaginationParams};
use crate::state::AppState;

/// POST /bookings
pub async fn create(
    State(state): State<AppState>,
    acting: ActingUser,
    Json(body): Json<CreateBookingBody>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let ctx = RequestContext::new(acting.0);
    let booking = state
        .booking_service
        .create(
            &ctx,
            CreateBookingRequest {
                item_id: body.item_id,
                start: body.start,
                end: body.end,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// PATCH /bookings/{id}
pub async fn update_status(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(booking_id): Path<Uuid>,
    Query(params): Query<ApproveParams>,
) -> Result<Json<BookingResponse>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let booking = state
        .booking_service
        .update_status(&ctx, booking_id, params.approved)
        .await?;

    Ok(Json(BookingResponse::from(booking)))
}

/// GET /bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let booking = state.booking_service.get_by_id(&ctx, booking_id).await?;

    Ok(Json(BookingResponse::from(booking)))
}

/// GET /bookings
pub async fn list_for_booker(
    State(state): State<AppState>,
    acting: ActingUser,
    Query(filter): Query<StateParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let page = pagination.into_page_request()?;
    let bookings = state
        .booking_service
        .list_for_booker(&ctx, &filter.state, &page)
        .await?;

    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}

/// GET /bookings/owner
pub async fn list_for_owner_items(
    State(state): State<AppState>,
    acting: ActingUser,
    Query(filter): Query<StateParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let page = pagination.into_page_request()?;
    let bookings = state
        .booking_service
        .list_for_owner_items(&ctx, &filter.state, &page)
        .await?;

    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}
