use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::articles::models::{
    Article, ArticleAuthor, ArticleImage, ArticleSeo, ArticleSponsorship,
};
use crate::features::categories::models::Category;
use crate::modules::content::repository::ContentRepository;

/// Canonical slug path of every category reachable from a root.
/// Categories caught in a parent cycle never appear here.
const CATEGORY_PATHS_CTE: &str = r#"
    WITH RECURSIVE category_paths AS (
        SELECT id, ARRAY[slug]::TEXT[] AS path
        FROM categories
        WHERE parent_id IS NULL OR parent_id = 0
           OR parent_id NOT IN (SELECT id FROM categories)
        UNION ALL
        SELECT c.id, cp.path || c.slug::TEXT
        FROM categories c
        JOIN category_paths cp ON c.parent_id = cp.id
    )
"#;

const CATEGORY_COLUMNS: &str = r#"
    c.id, c.parent_id, c.name, c.slug, c.description,
    (
        SELECT COUNT(*) FROM articles a
        WHERE a.category_id = c.id
          AND a.published_at IS NOT NULL AND a.published_at <= NOW()
    ) AS article_count
"#;

const ARTICLE_COLUMNS: &str = r#"
    a.id, a.category_id, cp.path AS category_path, a.slug, a.url, a.title,
    a.excerpt, a.content, a.images, a.author_name, a.author_avatar_url,
    a.seo_title, a.seo_description, a.seo_keywords,
    a.sponsor_name, a.sponsor_url, a.sponsor_disclosure,
    a.published_at, a.updated_at
"#;

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    category_id: i64,
    category_path: Vec<String>,
    slug: String,
    url: String,
    title: String,
    excerpt: Option<String>,
    content: String,
    images: Json<Vec<ArticleImage>>,
    author_name: Option<String>,
    author_avatar_url: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    seo_keywords: Vec<String>,
    sponsor_name: Option<String>,
    sponsor_url: Option<String>,
    sponsor_disclosure: Option<String>,
    published_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            category_path: row.category_path,
            slug: row.slug,
            url: row.url,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            images: row.images.0,
            author: row.author_name.map(|name| ArticleAuthor {
                name,
                avatar_url: row.author_avatar_url,
            }),
            seo: ArticleSeo {
                meta_title: row.seo_title,
                meta_description: row.seo_description,
                keywords: row.seo_keywords,
            },
            sponsorship: row.sponsor_name.map(|sponsor_name| ArticleSponsorship {
                sponsor_name,
                sponsor_url: row.sponsor_url,
                disclosure: row.sponsor_disclosure,
            }),
            published_at: row.published_at,
            updated_at: row.updated_at,
        }
    }
}

/// Content repository backed by PostgreSQL.
///
/// Only published articles (`published_at` in the past) are visible.
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn category_by_path_sql(filter: &str) -> String {
    format!(
        "{CATEGORY_PATHS_CTE} SELECT {CATEGORY_COLUMNS} FROM categories c \
         JOIN category_paths cp ON cp.id = c.id WHERE {filter} ORDER BY c.id LIMIT 1"
    )
}

fn published_articles_sql(filter: &str, tail: &str) -> String {
    format!(
        "{CATEGORY_PATHS_CTE} SELECT {ARTICLE_COLUMNS} FROM articles a \
         JOIN category_paths cp ON cp.id = a.category_id \
         WHERE a.published_at IS NOT NULL AND a.published_at <= NOW() AND {filter} {tail}"
    )
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c ORDER BY c.display_order, c.name"
        );

        sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.id = $1");

        sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by id {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.slug = $1 ORDER BY c.id LIMIT 1"
        );

        sqlx::query_as::<_, Category>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by slug {}: {:?}", slug, e);
                AppError::Database(e)
            })
    }

    async fn find_category_by_path(&self, path: &str) -> Result<Option<Category>> {
        let sql = category_by_path_sql("array_to_string(cp.path, '/') = $1");

        sqlx::query_as::<_, Category>(&sql)
            .bind(path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by path {}: {:?}", path, e);
                AppError::Database(e)
            })
    }

    async fn count_articles_in_category(&self, category_id: i64) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM articles
            WHERE category_id = $1
              AND published_at IS NOT NULL AND published_at <= NOW()
            "#,
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count articles in category {}: {:?}", category_id, e);
            AppError::Database(e)
        })
    }

    async fn list_articles_in_category(
        &self,
        category_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>> {
        let sql = published_articles_sql(
            "a.category_id = $1",
            "ORDER BY a.published_at DESC, a.id DESC LIMIT $2 OFFSET $3",
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list articles in category {}: {:?}", category_id, e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_article_by_id(&self, id: i64) -> Result<Option<Article>> {
        let sql = published_articles_sql("a.id = $1", "");

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get article by id {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.map(Article::from))
    }

    async fn find_article_by_path(
        &self,
        category_path: &str,
        slug: &str,
    ) -> Result<Option<Article>> {
        let sql = published_articles_sql(
            "array_to_string(cp.path, '/') = $1 AND a.slug = $2",
            "ORDER BY a.id LIMIT 1",
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(category_path)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to get article {} in category {}: {:?}",
                    slug,
                    category_path,
                    e
                );
                AppError::Database(e)
            })?;

        Ok(row.map(Article::from))
    }
}
