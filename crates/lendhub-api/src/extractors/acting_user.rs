//! `ActingUser` extractor — pulls the acting user id from the
//! `X-Sharer-User-Id` header.
//!
//! The header only identifies who is acting; whether that user exists is
//! the services' concern.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use lendhub_core::error::AppError;

use crate::error::ApiError;

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// The acting user's id, as claimed by the request.
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub Uuid);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError(AppError::validation(format!(
                    "Missing {USER_ID_HEADER} header"
                )))
            })?;

        let id = raw.parse::<Uuid>().map_err(|_| {
            ApiError(AppError::validation(format!(
                "{USER_ID_HEADER} must be a UUID"
            )))
        })?;

        Ok(ActingUser(id))
    }
}
