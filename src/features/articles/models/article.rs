use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article as resolved from the content repository
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub category_id: i64,
    /// Slugs from the root category down to the category the article is filed under
    pub category_path: Vec<String>,
    pub slug: String,
    /// Public URL of the article; its last segment is the article slug
    pub url: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub images: Vec<ArticleImage>,
    pub author: Option<ArticleAuthor>,
    pub seo: ArticleSeo,
    pub sponsorship: Option<ArticleSponsorship>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Canonical category path joined with `/`, e.g. "travel-tips/central-america"
    pub fn canonical_path(&self) -> String {
        self.category_path.join("/")
    }

    /// Final non-empty segment of the article URL, falling back to the stored slug
    pub fn url_slug(&self) -> &str {
        self.url
            .split('/')
            .rev()
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.slug)
    }
}

/// Image renditions, stored as a JSON array on the article row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleImage {
    pub original: String,
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAuthor {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleSeo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSponsorship {
    pub sponsor_name: String,
    pub sponsor_url: Option<String>,
    pub disclosure: Option<String>,
}
