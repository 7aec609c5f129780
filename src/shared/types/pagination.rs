/// Default page size when the caller does not send `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest `limit`/`offset` the database drivers can bind (signed 64-bit).
pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

/// Offset-based pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Pagination {
    /// Whether both bounds fit the database's signed integer parameters.
    pub fn is_bindable(&self) -> bool {
        self.limit <= MAX_PAGE_VALUE && self.offset <= MAX_PAGE_VALUE
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
