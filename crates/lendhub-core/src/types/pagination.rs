//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Request parameters for paginated queries.
///
/// Offset-based: `from` is the index of the first element to return and
/// `size` the maximum number of elements. Boundary validation (`size >= 1`,
/// non-negative values) is the transport layer's job; the stores simply
/// apply the resulting `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first element (0-based).
    pub from: u32,
    /// Maximum number of elements to return.
    pub size: u32,
}

impl PageRequest {
    /// Create a new page request. A zero `size` is bumped to one.
    pub fn new(from: u32, size: u32) -> Self {
        Self {
            from,
            size: size.max(1),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::from(self.from)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            from: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(40, 10);
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_zero_size_is_bumped() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.limit(), 1);
    }

    #[test]
    fn test_default() {
        let page = PageRequest::default();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), i64::from(DEFAULT_PAGE_SIZE));
    }
}
