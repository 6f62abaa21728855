//! API Response types
//!
//! Envelope for paginated list endpoints

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// One page of list results
///
/// ```json
/// {
///     "count": 12,
///     "page": 2,
///     "page_size": 5,
///     "total_pages": 3,
///     "next": 3,
///     "previous": 1,
///     "results": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total records matching the filter
    pub count: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Total pages (at least 1)
    pub total_pages: u32,
    /// Next page number, if any
    pub next: Option<u32>,
    /// Previous page number, if any
    pub previous: Option<u32>,
    /// Records on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64, request: PageRequest) -> Self {
        let total_pages = total_pages(count, request.size);
        let next = (request.number < total_pages).then(|| request.number + 1);
        let previous = (request.number > 1).then(|| request.number - 1);

        Self {
            count,
            page: request.number,
            page_size: request.size,
            total_pages,
            next,
            previous,
            results,
        }
    }
}

/// Number of pages needed for `count` records; an empty result still has one page.
pub fn total_pages(count: u64, size: u32) -> u32 {
    if size == 0 {
        return 1;
    }
    count.div_ceil(size as u64).max(1) as u32
}
