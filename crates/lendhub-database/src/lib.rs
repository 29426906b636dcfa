//! # lendhub-database
//!
//! Store trait definitions plus two complete sets of implementations:
//! PostgreSQL repositories for production and in-memory stores for tests
//! and lightweight deployments.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use stores::{BookingStore, BookingSubject, CommentStore, ItemStore, UserStore};
