//! Pagination request and result models.

/// Page number used when the request omits one or supplies a value below 1.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request omits one or supplies a value below 1.
pub const DEFAULT_LIMIT: u64 = 20;

/// Normalized pagination request.
///
/// Always holds `page >= 1` and `limit >= 1`; out-of-range inputs fall back to the
/// defaults rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Builds a request from raw, possibly missing or non-positive, values.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn positive_or(value: Option<i64>, default: u64) -> u64 {
    match value {
        Some(v) if v > 0 => v as u64,
        _ => default,
    }
}

/// One page of an ordered result set with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page; empty when the page is past the end.
    pub items: Vec<T>,
    /// Current page number (one-indexed).
    pub page: u64,
    /// Maximum number of items per page.
    pub limit: u64,
    /// Number of items across all pages.
    pub total: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
}
