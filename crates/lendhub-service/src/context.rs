//! Request context carrying the acting user and the request instant.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Context for the current request.
///
/// `request_time` is captured exactly once per logical operation and
/// threaded through every predicate that needs "now", so the temporal
/// partitions stay mutually exclusive at a single instant and services
/// are deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The acting user's ID, as supplied by the transport layer.
    pub user_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context stamped with the current time.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            request_time: Utc::now(),
        }
    }

    /// Creates a context with an explicit request instant.
    pub fn at(user_id: Uuid, request_time: DateTime<Utc>) -> Self {
        Self {
            user_id,
            request_time,
        }
    }
}
