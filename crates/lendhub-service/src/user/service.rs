//! User CRUD.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_database::UserStore;
use lendhub_entity::user::{CreateUser, User};

/// Manages user registration, updates, lookup, and deletion.
pub struct UserService {
    users: Arc<dyn UserStore>,
}

/// Request to register a new user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Partial update of an existing user.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    async fn find_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Registers a new user. The email must not be taken.
    pub async fn create(&self, req: CreateUserRequest) -> AppResult<User> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let user = self
            .users
            .create(&CreateUser {
                name: req.name,
                email: req.email,
            })
            .await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Partially updates a user. Blank names or emails are rejected; an
    /// email change is re-checked for conflicts.
    pub async fn update(&self, user_id: Uuid, req: UpdateUserRequest) -> AppResult<User> {
        let mut user = self.find_user(user_id).await?;

        if let Some(name) = req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("User name must not be blank"));
            }
            user.name = name;
        }
        if let Some(email) = req.email {
            if email.trim().is_empty() {
                return Err(AppError::validation("User email must not be blank"));
            }
            let taken = self
                .users
                .find_by_email(&email)
                .await?
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(AppError::conflict("User with this email already exists"));
            }
            user.email = email;
        }

        let user = self.users.update(&user).await?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Fetches one user.
    pub async fn get_by_id(&self, user_id: Uuid) -> AppResult<User> {
        self.find_user(user_id).await
    }

    /// Lists all users.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Deletes a user.
    pub async fn delete(&self, user_id: Uuid) -> AppResult<()> {
        if !self.users.delete(user_id).await? {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendhub_core::error::ErrorKind;

    use crate::testing::Fixture;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let fx = Fixture::new().await;

        let err = fx
            .user_service
            .create(CreateUserRequest {
                name: "impostor".into(),
                email: "owner@example.com".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let fx = Fixture::new().await;

        let err = fx
            .user_service
            .update(
                fx.owner.id,
                UpdateUserRequest {
                    name: Some("  ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_update_email_conflict_with_other_user() {
        let fx = Fixture::new().await;

        let err = fx
            .user_service
            .update(
                fx.owner.id,
                UpdateUserRequest {
                    email: Some("booker@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        // Re-asserting one's own email is not a conflict.
        let user = fx
            .user_service
            .update(
                fx.owner.id,
                UpdateUserRequest {
                    email: Some("owner@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(user.email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_delete_unknown_user_is_not_found() {
        let fx = Fixture::new().await;
        let err = fx.user_service.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
