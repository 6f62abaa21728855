//! Request types for the shared crate
//!
//! Common query-string types used by list endpoints

use crate::error::{AppError, AppResult, ErrorCode};

/// Pagination query parameters
///
/// Both values are kept as raw strings so malformed input can be handled the
/// same way for every endpoint: a bad `page` is an error, a bad `page_size`
/// falls back to the default.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    pub page: Option<String>,

    /// Items per page (default and cap come from config)
    pub page_size: Option<String>,
}

/// A resolved, validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub number: u32,
    /// Items per page, at least 1
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    /// Get the offset for database queries
    pub fn offset(&self) -> u64 {
        (self.number - 1) as u64 * self.size as u64
    }
}

impl PaginationQuery {
    /// Resolve the raw query into a [`PageRequest`]
    ///
    /// `page_size` is capped at `max_size`; a missing, non-numeric or zero
    /// value uses `default_size`. A `page` that is not a positive integer is
    /// rejected with [`ErrorCode::InvalidPage`].
    pub fn resolve(&self, default_size: u32, max_size: u32) -> AppResult<PageRequest> {
        let number = match self.page.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(AppError::new(ErrorCode::InvalidPage)),
            },
        };

        let size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|&s| s >= 1)
            .unwrap_or(default_size)
            .min(max_size);

        Ok(PageRequest::new(number, size))
    }
}
