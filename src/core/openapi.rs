use utoipa::{Modify, OpenApi};

use crate::features::articles::{dtos as articles_dtos, handlers as articles_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::pagination::PaginationMeta;
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Articles
        articles_handlers::list_category_articles,
        articles_handlers::get_article_by_id,
        articles_handlers::get_article_by_path,
    ),
    components(
        schemas(
            // Shared
            PaginationMeta,
            ErrorResponse,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            categories_dtos::CategoryListing,
            ApiResponse<categories_dtos::CategoryListing>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Articles
            articles_dtos::FeaturedImageDto,
            articles_dtos::ArticleSummaryDto,
            articles_dtos::ArticleImageDto,
            articles_dtos::ArticleAuthorDto,
            articles_dtos::ArticleSeoDto,
            articles_dtos::ArticleSponsorshipDto,
            articles_dtos::ArticleResponseDto,
            ApiResponse<Vec<articles_dtos::ArticleSummaryDto>>,
            ApiResponse<articles_dtos::ArticleResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Learn category hierarchy (public)"),
        (name = "articles", description = "Learn articles by category, path, or legacy id (public)"),
    ),
    info(
        title = "Learn Content API",
        version = "0.1.0",
        description = "Read-only API for learn categories and articles",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
