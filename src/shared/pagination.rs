//! Page/limit normalization and pagination metadata for list endpoints.
//!
//! Inputs arrive as raw query strings. Anything that does not parse as an
//! integer is treated as if the parameter was omitted, so the defaults apply.
//! Parsed values are clamped, never rejected: `page` has a floor of 1 and no
//! ceiling, `limit` is kept within `1..=MAX_PAGE_SIZE`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Raw pagination query parameters as sent by the client
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<String>,

    /// Number of items per page (default: 10, max: 100)
    #[param(value_type = Option<i64>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

/// Normalized page request handed to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_or_default(page, DEFAULT_PAGE).max(1);
        let limit = parse_or_default(limit, DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        Self { page, limit }
    }

    pub fn from_query(query: &PaginationQuery) -> Self {
        Self::from_raw(query.page.as_deref(), query.limit.as_deref())
    }

    /// SQL OFFSET for this page
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    match raw.map(str::trim) {
        Some(value) => value.parse::<i64>().unwrap_or_else(|_| {
            tracing::debug!("Ignoring unparsable pagination value {:?}", value);
            default
        }),
        None => default,
    }
}

/// Pagination metadata for response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total = total.max(0);
        // Ceiling division without `total + limit` overflowing near i64::MAX
        let total_pages = total / request.limit + i64::from(total % request.limit != 0);

        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next_page: request.page < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}
