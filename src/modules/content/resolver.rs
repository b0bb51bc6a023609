use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::articles::models::Article;
use crate::features::categories::models::Category;
use crate::modules::content::path::ArticlePath;
use crate::modules::content::repository::ContentRepository;
use crate::shared::validation::NUMERIC_ID_REGEX;

/// How an incoming category identifier addresses its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    /// All digits; the value may still overflow i64
    Numeric(&'a str),
    /// Nested slug path such as "travel-tips/central-america"
    Path(&'a str),
    Slug(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if NUMERIC_ID_REGEX.is_match(raw) {
            Identifier::Numeric(raw)
        } else if raw.contains('/') {
            Identifier::Path(raw)
        } else {
            Identifier::Slug(raw)
        }
    }
}

/// Turns identifiers and article paths into canonical records
#[derive(Clone)]
pub struct ContentResolver {
    repository: Arc<dyn ContentRepository>,
}

impl ContentResolver {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a category by numeric id, slug, or nested slug path
    pub async fn resolve_category(&self, identifier: &str) -> Result<Category> {
        let category = match Identifier::classify(identifier) {
            Identifier::Numeric(raw) => match raw.parse::<i64>() {
                Ok(id) => {
                    tracing::debug!("Resolving category {} by id", id);
                    self.repository.find_category_by_id(id).await?
                }
                Err(_) => {
                    tracing::debug!("Category id {} is out of range", raw);
                    None
                }
            },
            Identifier::Path(raw) => {
                let path = normalize_path(raw);
                tracing::debug!("Resolving category by path {}", path);
                self.repository.find_category_by_path(&path).await?
            }
            Identifier::Slug(slug) => {
                tracing::debug!("Resolving category by slug {}", slug);
                self.repository.find_category_by_slug(slug).await?
            }
        };

        category.ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", identifier)))
    }

    /// Resolve an article from a raw `.../article/<category path>/<slug>` request path.
    ///
    /// The article must be filed under exactly that category path.
    pub async fn resolve_article_by_path(&self, raw_path: &str) -> Result<Article> {
        let ArticlePath {
            category_path,
            article_slug,
        } = ArticlePath::parse(raw_path)?;

        self.repository
            .find_article_by_path(&category_path, &article_slug)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Article '{}' not found in category '{}'",
                    article_slug, category_path
                ))
            })
    }

    /// Legacy lookup by numeric article id
    pub async fn resolve_article_by_id(&self, id: i64) -> Result<Article> {
        self.repository
            .find_article_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article with id {} not found", id)))
    }
}

fn normalize_path(raw: &str) -> String {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{article, category, InMemoryContentRepository, Lookup};

    fn fixture() -> Arc<InMemoryContentRepository> {
        Arc::new(InMemoryContentRepository::new(
            vec![
                category(1, None, "travel-tips"),
                category(2, Some(1), "central-america"),
                category(3, Some(1), "europe"),
                category(4, None, "guides"),
                category(5, Some(4), "europe"),
            ],
            vec![
                article(10, 2, &["travel-tips", "central-america"], "guatemala-guide"),
                article(11, 3, &["travel-tips", "europe"], "rail-passes"),
            ],
        ))
    }

    #[test]
    fn test_classify() {
        assert_eq!(Identifier::classify("42"), Identifier::Numeric("42"));
        assert_eq!(Identifier::classify("04"), Identifier::Numeric("04"));
        assert_eq!(
            Identifier::classify("travel-tips"),
            Identifier::Slug("travel-tips")
        );
        assert_eq!(
            Identifier::classify("travel-tips/europe"),
            Identifier::Path("travel-tips/europe")
        );
        assert_eq!(Identifier::classify("42a"), Identifier::Slug("42a"));
        assert_eq!(Identifier::classify("١٢٣"), Identifier::Slug("١٢٣"));
    }

    #[tokio::test]
    async fn test_numeric_identifier_uses_id_lookup() {
        let repo = fixture();
        let resolver = ContentResolver::new(repo.clone());

        let found = resolver.resolve_category("04").await.unwrap();
        assert_eq!(found.slug, "guides");
        assert_eq!(repo.lookups(), vec![Lookup::CategoryById(4)]);
    }

    #[tokio::test]
    async fn test_slug_identifier_uses_slug_lookup() {
        let repo = fixture();
        let resolver = ContentResolver::new(repo.clone());

        let found = resolver.resolve_category("travel-tips").await.unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(
            repo.lookups(),
            vec![Lookup::CategoryBySlug("travel-tips".to_string())]
        );
    }

    #[tokio::test]
    async fn test_non_ascii_digit_slug_uses_slug_lookup() {
        let repo = Arc::new(InMemoryContentRepository::new(
            vec![category(8, None, "١٢٣")],
            Vec::new(),
        ));
        let resolver = ContentResolver::new(repo.clone());

        let found = resolver.resolve_category("١٢٣").await.unwrap();
        assert_eq!(found.id, 8);
        assert_eq!(repo.lookups(), vec![Lookup::CategoryBySlug("١٢٣".to_string())]);
    }

    #[tokio::test]
    async fn test_nested_identifier_uses_path_lookup() {
        let repo = fixture();
        let resolver = ContentResolver::new(repo.clone());

        let found = resolver.resolve_category("/guides/europe/").await.unwrap();
        assert_eq!(found.id, 5);
        assert_eq!(
            repo.lookups(),
            vec![Lookup::CategoryByPath("guides/europe".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_category_is_not_found() {
        let resolver = ContentResolver::new(fixture());

        assert!(matches!(
            resolver.resolve_category("42").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            resolver.resolve_category("unknown").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            resolver.resolve_category("guides/central-america").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_overflowing_id_is_not_found_without_lookup() {
        let repo = fixture();
        let resolver = ContentResolver::new(repo.clone());

        let result = resolver.resolve_category("99999999999999999999").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(repo.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_article_by_path() {
        let resolver = ContentResolver::new(fixture());

        let found = resolver
            .resolve_article_by_path("/api/article/travel-tips/central-america/guatemala-guide")
            .await
            .unwrap();
        assert_eq!(found.id, 10);
    }

    #[tokio::test]
    async fn test_article_by_path_requires_exact_category_path() {
        let resolver = ContentResolver::new(fixture());

        let result = resolver
            .resolve_article_by_path("/api/article/travel-tips/europe/guatemala-guide")
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Matching slug but truncated category path
        let result = resolver
            .resolve_article_by_path("/api/article/central-america/guatemala-guide")
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_path_never_reaches_repository() {
        let repo = fixture();
        let resolver = ContentResolver::new(repo.clone());

        let result = resolver
            .resolve_article_by_path("/api/article/only-one-part")
            .await;
        assert!(matches!(result, Err(AppError::InvalidPath(_))));
        assert!(repo.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_article_by_legacy_id() {
        let resolver = ContentResolver::new(fixture());

        assert_eq!(resolver.resolve_article_by_id(11).await.unwrap().slug, "rail-passes");
        assert!(matches!(
            resolver.resolve_article_by_id(999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
