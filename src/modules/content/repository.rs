use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::articles::models::Article;
use crate::features::categories::models::Category;

/// Read access to categories and published articles.
///
/// Lookups that find nothing return `Ok(None)`; turning that into a
/// not-found error is the caller's job. Backend failures are returned as-is.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All categories, ordered for display (parents are not required to precede children)
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// First category carrying `slug` at any depth
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Category whose slug chain from the root equals `path` ("a/b/c")
    async fn find_category_by_path(&self, path: &str) -> Result<Option<Category>>;

    async fn count_articles_in_category(&self, category_id: i64) -> Result<i64>;

    /// One page of articles filed directly under the category, newest first
    async fn list_articles_in_category(
        &self,
        category_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>>;

    async fn find_article_by_id(&self, id: i64) -> Result<Option<Article>>;

    /// Article with `slug` whose canonical category path is exactly `category_path`
    async fn find_article_by_path(&self, category_path: &str, slug: &str)
        -> Result<Option<Article>>;
}
