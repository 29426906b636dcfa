//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use lendhub_service::user::{CreateUserRequest, UpdateUserRequest};

use crate::dto::request::{CreateUserBody, UpdateUserBody};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_service
        .create(CreateUserRequest {
            name: body.name,
            email: body.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PATCH /users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update(
            user_id,
            UpdateUserRequest {
                name: body.name,
                email: body.email,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_by_id(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
