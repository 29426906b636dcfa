//! Item services: CRUD and search, rental-context enrichment, and the
//! comment eligibility gate.

pub mod availability;
pub mod comments;
pub mod service;

pub use availability::AvailabilityService;
pub use comments::{CommentService, CreateCommentRequest};
pub use service::{CreateItemRequest, ItemService, UpdateItemRequest};
