use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::categories::dtos::{CategoryListing, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Query params for listing categories
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCategoriesQuery {
    /// If true, return a flat list instead of the tree. Default: false
    #[serde(default)]
    pub flat: bool,
}

/// List categories
///
/// Returns the root categories with their children nested, or a flat list
/// when `flat=true`.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "Category tree or flat list", body = ApiResponse<CategoryListing>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Category data does not form a tree", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<CategoryListing>>> {
    let listing = if query.flat {
        CategoryListing::Flat(service.list().await?)
    } else {
        CategoryListing::Tree(service.list_tree().await?)
    };

    Ok(Json(ApiResponse::success(Some(listing), None, None)))
}

/// Get category by id or slug
///
/// All-digit identifiers are looked up by id (`04` is id 4). A
/// percent-encoded slug path such as `travel-tips%2Fcentral-america`
/// addresses a nested category.
#[utoipa::path(
    get,
    path = "/api/categories/{identifier}",
    params(
        ("identifier" = String, Path, description = "Category id, slug, or slug path")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(identifier): AppPath<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_identifier(&identifier).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}
