use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::articles::handlers;
use crate::features::articles::services::ArticleService;
use crate::shared::routing::{build_router, Capability, RouteSpec};

/// Route table for the articles feature
pub const ROUTES: &[RouteSpec<Arc<ArticleService>>] = &[
    RouteSpec {
        path: "/api/categories/{identifier}/articles",
        capability: Capability::Public,
        handler: || get(handlers::list_category_articles),
    },
    // Legacy numeric ids, kept next to the path route
    RouteSpec {
        path: "/api/articles/{id}",
        capability: Capability::Public,
        handler: || get(handlers::get_article_by_id),
    },
    // The handler reads the raw request path, so a bare prefix still gets a
    // path error instead of a router miss
    RouteSpec {
        path: "/api/article/",
        capability: Capability::Public,
        handler: || get(handlers::get_article_by_path),
    },
    RouteSpec {
        path: "/api/article/{*path}",
        capability: Capability::Public,
        handler: || get(handlers::get_article_by_path),
    },
];

/// Create routes for the articles feature
pub fn routes(service: Arc<ArticleService>) -> Router {
    build_router(ROUTES, service)
}
