//! User CRUD service.

pub mod service;

pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
