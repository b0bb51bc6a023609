use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::articles::dtos::{ArticleResponseDto, ArticleSummaryDto};
use crate::features::articles::services::ArticleService;
use crate::shared::pagination::PaginationQuery;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List articles in a category with pagination
///
/// `page` and `limit` are clamped rather than rejected; values that are not
/// integers fall back to the defaults (page 1, limit 10).
#[utoipa::path(
    get,
    path = "/api/categories/{identifier}/articles",
    params(
        ("identifier" = String, Path, description = "Category id, slug, or slug path"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Paginated articles list", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "articles"
)]
pub async fn list_category_articles(
    State(service): State<Arc<ArticleService>>,
    AppPath(identifier): AppPath<String>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ArticleSummaryDto>>>> {
    let (articles, pagination) = service.list_by_category(&identifier, &query).await?;
    Ok(Json(ApiResponse::success(
        Some(articles),
        None,
        Some(pagination),
    )))
}

/// Get article by legacy numeric id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(
        ("id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<ArticleResponseDto>),
        (status = 404, description = "Article not found or id is not an integer", body = ErrorResponse)
    ),
    tag = "articles"
)]
pub async fn get_article_by_id(
    State(service): State<Arc<ArticleService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let article = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(article), None, None)))
}

/// Get article by hierarchical path
///
/// The last segment is the article slug, everything before it is the
/// category path the article must be filed under.
#[utoipa::path(
    get,
    path = "/api/article/{path}",
    params(
        ("path" = String, Path, description = "Category path and article slug, e.g. travel-tips/central-america/guatemala-guide")
    ),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<ArticleResponseDto>),
        (status = 404, description = "Malformed path or article not found", body = ErrorResponse)
    ),
    tag = "articles"
)]
pub async fn get_article_by_path(
    State(service): State<Arc<ArticleService>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<ApiResponse<ArticleResponseDto>>> {
    let article = service.get_by_path(uri.path()).await?;
    Ok(Json(ApiResponse::success(Some(article), None, None)))
}
