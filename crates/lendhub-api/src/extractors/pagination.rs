//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use lendhub_core::error::AppError;
use lendhub_core::types::pagination::PageRequest;

use crate::error::ApiError;

/// Query parameters for paginated endpoints.
///
/// Boundary validation lives here: `from` must be non-negative and
/// `size` positive before the values reach the services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Index of the first element (default: 0).
    #[serde(default)]
    pub from: i64,
    /// Maximum number of elements (default: 20).
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    20
}

impl PaginationParams {
    /// Validates the parameters and converts to a `PageRequest`.
    pub fn into_page_request(self) -> Result<PageRequest, ApiError> {
        if self.from < 0 {
            return Err(ApiError(AppError::validation("from must not be negative")));
        }
        if self.size < 1 {
            return Err(ApiError(AppError::validation("size must be positive")));
        }
        Ok(PageRequest::new(self.from as u32, self.size as u32))
    }
}
