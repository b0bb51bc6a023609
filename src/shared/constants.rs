/// Page number used when the client omits `page` or sends garbage
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// CONTENT ROUTING
// =============================================================================

/// Marker that separates the route prefix from the hierarchical article path,
/// e.g. `/api/article/travel-tips/central-america/guatemala-guide`
pub const ARTICLE_PATH_MARKER: &str = "/article/";
