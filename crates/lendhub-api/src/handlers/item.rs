//! Item handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use lendhub_service::RequestContext;
use lendhub_service::item::{CreateCommentRequest, CreateItemRequest, UpdateItemRequest};

use crate::dto::request::{CreateCommentBody, CreateItemBody, SearchParams, UpdateItemBody};
use crate::dto::response::{CommentResponse, ItemDetailsResponse, ItemResponse};
use crate::error::ApiError;
use crate::extractors::ActingUser;
use crate::state::AppState;

/// POST /items
pub async fn create(
    State(state): State<AppState>,
    acting: ActingUser,
    Json(body): Json<CreateItemBody>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let ctx = RequestContext::new(acting.0);
    let item = state
        .item_service
        .create(
            &ctx,
            CreateItemRequest {
                name: body.name,
                description: body.description,
                available: body.available,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// PATCH /items/{id}
pub async fn update(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(item_id): Path<Uuid>,
    Json(body): Json<UpdateItemBody>,
) -> Result<Json<ItemResponse>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let item = state
        .item_service
        .update(
            &ctx,
            item_id,
            UpdateItemRequest {
                name: body.name,
                description: body.description,
                available: body.available,
            },
        )
        .await?;

    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id}
pub async fn delete(
    State(state): State<AppState>,
    _acting: ActingUser,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.item_service.delete(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ItemDetailsResponse>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let details = state.item_service.get_by_id(&ctx, item_id).await?;

    Ok(Json(ItemDetailsResponse::from(details)))
}

/// GET /items
pub async fn list_own(
    State(state): State<AppState>,
    acting: ActingUser,
) -> Result<Json<Vec<ItemDetailsResponse>>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let details = state.item_service.list_own(&ctx).await?;

    Ok(Json(
        details.into_iter().map(ItemDetailsResponse::from).collect(),
    ))
}

/// GET /items/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.item_service.search(&params.text).await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items/{id}/comment
pub async fn add_comment(
    State(state): State<AppState>,
    acting: ActingUser,
    Path(item_id): Path<Uuid>,
    Json(body): Json<CreateCommentBody>,
) -> Result<Json<CommentResponse>, ApiError> {
    let ctx = RequestContext::new(acting.0);
    let comment = state
        .comment_service
        .add_comment(&ctx, item_id, CreateCommentRequest { text: body.text })
        .await?;

    Ok(Json(CommentResponse::from(comment)))
}
