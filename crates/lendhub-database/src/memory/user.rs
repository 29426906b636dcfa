//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use lendhub_core::error::AppError;
use lendhub_core::result::AppResult;
use lendhub_entity::user::{CreateUser, User};

use crate::stores::UserStore;

/// DashMap-backed [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> bool {
        self.users.iter().any(|entry| {
            entry.email.eq_ignore_ascii_case(email) && Some(entry.id) != exclude
        })
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        if self.email_taken(&data.email, None) {
            return Err(AppError::conflict("User with this email already exists"));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        if self.email_taken(&user.email, Some(user.id)) {
            return Err(AppError::conflict("User with this email already exists"));
        }
        if !self.users.contains_key(&user.id) {
            return Err(AppError::not_found(format!("User {} not found", user.id)));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}
