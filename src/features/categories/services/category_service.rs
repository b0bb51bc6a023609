use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, CategoryTreeDto};
use crate::modules::content::{ContentRepository, ContentResolver};

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn ContentRepository>,
    resolver: ContentResolver,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        let resolver = ContentResolver::new(Arc::clone(&repository));
        Self {
            repository,
            resolver,
        }
    }

    /// List all categories (flat list)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_categories().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// List all categories as tree structure
    pub async fn list_tree(&self) -> Result<Vec<CategoryTreeDto>> {
        let categories = self.repository.list_categories().await?;
        CategoryTreeDto::build_tree(categories)
    }

    /// Get category by numeric id, slug, or nested slug path
    pub async fn get_by_identifier(&self, identifier: &str) -> Result<CategoryResponseDto> {
        let category = self.resolver.resolve_category(identifier).await?;
        Ok(category.into())
    }
}
