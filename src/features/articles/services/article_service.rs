use std::sync::Arc;

use crate::core::error::Result;
use crate::features::articles::dtos::{ArticleResponseDto, ArticleSummaryDto};
use crate::modules::content::{ContentRepository, ContentResolver};
use crate::shared::pagination::{PageRequest, PaginationMeta, PaginationQuery};

/// Service for article lookups and category listings
pub struct ArticleService {
    repository: Arc<dyn ContentRepository>,
    resolver: ContentResolver,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        let resolver = ContentResolver::new(Arc::clone(&repository));
        Self {
            repository,
            resolver,
        }
    }

    /// List one page of articles filed under a category.
    /// Returns (articles, pagination)
    pub async fn list_by_category(
        &self,
        identifier: &str,
        query: &PaginationQuery,
    ) -> Result<(Vec<ArticleSummaryDto>, PaginationMeta)> {
        let category = self.resolver.resolve_category(identifier).await?;
        let request = PageRequest::from_query(query);

        let total = self
            .repository
            .count_articles_in_category(category.id)
            .await?;

        let articles = self
            .repository
            .list_articles_in_category(category.id, request.limit, request.offset())
            .await?;

        Ok((
            articles.into_iter().map(|a| a.into()).collect(),
            PaginationMeta::new(request, total),
        ))
    }

    /// Get article by legacy numeric id
    pub async fn get_by_id(&self, id: i64) -> Result<ArticleResponseDto> {
        let article = self.resolver.resolve_article_by_id(id).await?;
        Ok(article.into())
    }

    /// Get article by raw request path (`.../article/<category path>/<slug>`)
    pub async fn get_by_path(&self, raw_path: &str) -> Result<ArticleResponseDto> {
        let article = self.resolver.resolve_article_by_path(raw_path).await?;
        Ok(article.into())
    }
}
