use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;
use crate::shared::routing::{build_router, Capability, RouteSpec};

/// Route table for the categories feature
pub const ROUTES: &[RouteSpec<Arc<CategoryService>>] = &[
    RouteSpec {
        path: "/api/categories",
        capability: Capability::Public,
        handler: || get(handlers::list_categories),
    },
    RouteSpec {
        path: "/api/categories/{identifier}",
        capability: Capability::Public,
        handler: || get(handlers::get_category),
    },
];

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    build_router(ROUTES, service)
}
