mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::articles::{routes as articles_routes, ArticleService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::modules::content::{ContentRepository, PgContentRepository};
use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Simple health check endpoint
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Every content endpoint plus `/health`, served from `repository`
fn content_routes(repository: Arc<dyn ContentRepository>) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&repository)));
    let article_service = Arc::new(ArticleService::new(repository));

    Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(articles_routes::routes(article_service))
        .route("/health", axum::routing::get(health_check))
}

fn swagger_routes(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::swagger_basic_auth,
            ))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    let repository: Arc<dyn ContentRepository> = Arc::new(PgContentRepository::new(pool));
    tracing::info!("Content repository initialized");

    let app = Router::new()
        .merge(swagger_routes(&config))
        .merge(content_routes(repository))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{article, category, InMemoryContentRepository};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        let categories = vec![
            category(1, None, "travel-tips"),
            category(2, Some(1), "central-america"),
            category(3, Some(0), "guides"),
        ];
        let mut articles: Vec<_> = (1..=12)
            .map(|id| {
                article(
                    id,
                    2,
                    &["travel-tips", "central-america"],
                    &format!("guide-{id}"),
                )
            })
            .collect();
        articles.push(article(20, 1, &["travel-tips"], "packing-list"));

        let repository = Arc::new(InMemoryContentRepository::new(categories, articles));
        TestServer::new(content_routes(repository)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        server().get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_category_tree() {
        let response = server().get("/api/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let roots = body["data"].as_array().unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0]["slug"], "travel-tips");
        assert_eq!(roots[0]["children"][0]["slug"], "central-america");
        assert!(body.get("meta").is_none() || body["meta"].is_null());
    }

    #[tokio::test]
    async fn test_category_flat_list() {
        let response = server()
            .get("/api/categories")
            .add_query_param("flat", "true")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_category_by_identifier() {
        let server = server();

        let by_id: Value = server.get("/api/categories/2").await.json();
        assert_eq!(by_id["data"]["slug"], "central-america");

        let by_slug: Value = server.get("/api/categories/guides").await.json();
        assert_eq!(by_slug["data"]["id"], 3);

        let by_path: Value = server
            .get("/api/categories/travel-tips%2Fcentral-america")
            .await
            .json();
        assert_eq!(by_path["data"]["id"], 2);
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let response = server().get("/api/categories/nowhere").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_category_articles_paginated() {
        let response = server()
            .get("/api/categories/central-america/articles")
            .add_query_param("page", "2")
            .add_query_param("limit", "5")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        // Newest first: page 2 starts after ids 12..=8
        assert_eq!(data[0]["id"], 7);

        let meta = &body["meta"];
        assert_eq!(meta["page"], 2);
        assert_eq!(meta["limit"], 5);
        assert_eq!(meta["total"], 12);
        assert_eq!(meta["totalPages"], 3);
        assert_eq!(meta["hasNextPage"], true);
        assert_eq!(meta["hasPreviousPage"], true);
    }

    #[tokio::test]
    async fn test_category_articles_clamps_and_defaults() {
        let server = server();

        let clamped: Value = server
            .get("/api/categories/2/articles")
            .add_query_param("page", "0")
            .add_query_param("limit", "500")
            .await
            .json();
        assert_eq!(clamped["meta"]["page"], 1);
        assert_eq!(clamped["meta"]["limit"], 100);

        let defaulted: Value = server
            .get("/api/categories/2/articles")
            .add_query_param("page", "abc")
            .await
            .json();
        assert_eq!(defaulted["meta"]["page"], 1);
        assert_eq!(defaulted["meta"]["limit"], 10);
        assert_eq!(defaulted["data"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_article_by_path() {
        let response = server()
            .get("/api/article/travel-tips/central-america/guide-3")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["categoryPath"], "travel-tips/central-america");
    }

    #[tokio::test]
    async fn test_article_under_wrong_category_is_404() {
        let response = server().get("/api/article/travel-tips/guide-3").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_article_paths_are_404() {
        let server = server();

        for path in ["/api/article/", "/api/article/packing-list"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);

            let body: Value = response.json();
            assert_eq!(body["statusCode"], 404);
        }
    }

    #[tokio::test]
    async fn test_legacy_article_by_id() {
        let server = server();

        let body: Value = server.get("/api/articles/20").await.json();
        assert_eq!(body["data"]["slug"], "packing-list");

        server
            .get("/api/articles/999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_integer_article_id_uses_error_body() {
        let server = server();

        for path in ["/api/articles/abc", "/api/articles/99999999999999999999"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);

            let body: Value = response.json();
            assert_eq!(body["statusCode"], 404);
            assert_eq!(body["error"], "Not Found");
        }
    }

    #[tokio::test]
    async fn test_bad_query_uses_error_body() {
        let response = server()
            .get("/api/categories")
            .add_query_param("flat", "maybe")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_encoded_slash_in_article_path_is_404() {
        let response = server()
            .get("/api/article/travel-tips/central-america%2Fguide-3")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "encoded slash in path segment");
    }

    #[tokio::test]
    async fn test_database_failure_is_500_without_details() {
        let server =
            TestServer::new(content_routes(Arc::new(InMemoryContentRepository::failing())))
                .unwrap();

        let response = server.get("/api/categories").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "Database error occurred");
    }
}
