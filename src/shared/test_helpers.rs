#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use chrono::{DateTime, Duration, TimeZone, Utc};

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::articles::models::{Article, ArticleImage, ArticleSeo};
#[cfg(test)]
use crate::features::categories::models::Category;
#[cfg(test)]
use crate::modules::content::ContentRepository;

/// Repository call recorded by [`InMemoryContentRepository`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ListCategories,
    CategoryById(i64),
    CategoryBySlug(String),
    CategoryByPath(String),
    CountArticles(i64),
    ListArticles {
        category_id: i64,
        limit: i64,
        offset: i64,
    },
    ArticleById(i64),
    ArticleByPath(String, String),
}

/// In-memory content store that records every lookup it serves
#[cfg(test)]
pub struct InMemoryContentRepository {
    categories: Vec<Category>,
    articles: Vec<Article>,
    lookups: Mutex<Vec<Lookup>>,
    fail_with_database_error: bool,
}

#[cfg(test)]
impl InMemoryContentRepository {
    pub fn new(categories: Vec<Category>, articles: Vec<Article>) -> Self {
        Self {
            categories,
            articles,
            lookups: Mutex::new(Vec::new()),
            fail_with_database_error: false,
        }
    }

    /// Repository whose every call fails like a lost database connection
    pub fn failing() -> Self {
        Self {
            fail_with_database_error: true,
            ..Self::new(Vec::new(), Vec::new())
        }
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().unwrap().clone()
    }

    fn record(&self, lookup: Lookup) -> Result<()> {
        self.lookups.lock().unwrap().push(lookup);
        if self.fail_with_database_error {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn path_of(&self, category: &Category) -> Option<String> {
        let mut slugs = vec![category.slug.as_str()];
        let mut current = category;
        // A chain longer than the table means a cycle
        for _ in 0..self.categories.len() {
            let Some(parent_id) = current.declared_parent() else {
                slugs.reverse();
                return Some(slugs.join("/"));
            };
            current = self.categories.iter().find(|c| c.id == parent_id)?;
            slugs.push(current.slug.as_str());
        }
        None
    }
}

#[cfg(test)]
#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record(Lookup::ListCategories)?;
        Ok(self.categories.clone())
    }

    async fn find_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.record(Lookup::CategoryById(id))?;
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.record(Lookup::CategoryBySlug(slug.to_string()))?;
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn find_category_by_path(&self, path: &str) -> Result<Option<Category>> {
        self.record(Lookup::CategoryByPath(path.to_string()))?;
        Ok(self
            .categories
            .iter()
            .find(|c| self.path_of(c).as_deref() == Some(path))
            .cloned())
    }

    async fn count_articles_in_category(&self, category_id: i64) -> Result<i64> {
        self.record(Lookup::CountArticles(category_id))?;
        Ok(self
            .articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .count() as i64)
    }

    async fn list_articles_in_category(
        &self,
        category_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>> {
        self.record(Lookup::ListArticles {
            category_id,
            limit,
            offset,
        })?;

        let mut articles: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| a.category_id == category_id)
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));

        Ok(articles
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn find_article_by_id(&self, id: i64) -> Result<Option<Article>> {
        self.record(Lookup::ArticleById(id))?;
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_article_by_path(
        &self,
        category_path: &str,
        slug: &str,
    ) -> Result<Option<Article>> {
        self.record(Lookup::ArticleByPath(
            category_path.to_string(),
            slug.to_string(),
        ))?;
        Ok(self
            .articles
            .iter()
            .find(|a| a.slug == slug && a.canonical_path() == category_path)
            .cloned())
    }
}

#[cfg(test)]
pub fn category(id: i64, parent_id: Option<i64>, slug: &str) -> Category {
    Category {
        id,
        parent_id,
        name: slug.replace('-', " "),
        slug: slug.to_string(),
        description: None,
        article_count: 0,
    }
}

#[cfg(test)]
fn fixture_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Published article; higher ids are published later
#[cfg(test)]
pub fn article(id: i64, category_id: i64, category_path: &[&str], slug: &str) -> Article {
    let published_at = fixture_epoch() + Duration::days(id);
    Article {
        id,
        category_id,
        category_path: category_path.iter().map(|s| s.to_string()).collect(),
        slug: slug.to_string(),
        url: format!("/article/{}/{}", category_path.join("/"), slug),
        title: slug.replace('-', " "),
        excerpt: Some(format!("About {}", slug)),
        content: format!("<p>{}</p>", slug),
        images: vec![ArticleImage {
            original: format!("https://cdn.example.com/{}.jpg", slug),
            thumbnail: Some(format!("https://cdn.example.com/{}-thumb.jpg", slug)),
            medium: None,
            alt: None,
        }],
        author: None,
        seo: ArticleSeo::default(),
        sponsorship: None,
        published_at: Some(published_at),
        updated_at: published_at,
    }
}
