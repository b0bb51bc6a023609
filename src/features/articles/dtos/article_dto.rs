use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::articles::models::{
    Article, ArticleAuthor, ArticleImage, ArticleSeo, ArticleSponsorship,
};

/// Image renditions of an article's lead image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImageDto {
    pub original: String,
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
}

impl From<&ArticleImage> for FeaturedImageDto {
    fn from(image: &ArticleImage) -> Self {
        Self {
            original: image.original.clone(),
            thumbnail: image.thumbnail.clone(),
            medium: image.medium.clone(),
        }
    }
}

/// Article item for category listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<FeaturedImageDto>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            slug: a.url_slug().to_string(),
            featured_image: a.images.first().map(FeaturedImageDto::from),
            title: a.title,
            excerpt: a.excerpt,
            published_at: a.published_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImageDto {
    pub original: String,
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
    pub alt: Option<String>,
}

impl From<ArticleImage> for ArticleImageDto {
    fn from(i: ArticleImage) -> Self {
        Self {
            original: i.original,
            thumbnail: i.thumbnail,
            medium: i.medium,
            alt: i.alt,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthorDto {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<ArticleAuthor> for ArticleAuthorDto {
    fn from(a: ArticleAuthor) -> Self {
        Self {
            name: a.name,
            avatar_url: a.avatar_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSeoDto {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
}

impl From<ArticleSeo> for ArticleSeoDto {
    fn from(s: ArticleSeo) -> Self {
        Self {
            meta_title: s.meta_title,
            meta_description: s.meta_description,
            keywords: s.keywords,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSponsorshipDto {
    pub sponsor_name: String,
    pub sponsor_url: Option<String>,
    pub disclosure: Option<String>,
}

impl From<ArticleSponsorship> for ArticleSponsorshipDto {
    fn from(s: ArticleSponsorship) -> Self {
        Self {
            sponsor_name: s.sponsor_name,
            sponsor_url: s.sponsor_url,
            disclosure: s.disclosure,
        }
    }
}

/// Response DTO for a full article
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponseDto {
    pub id: i64,
    pub category_id: i64,
    /// Canonical category path, e.g. "travel-tips/central-america"
    pub category_path: String,
    pub slug: String,
    pub url: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub images: Vec<ArticleImageDto>,
    pub author: Option<ArticleAuthorDto>,
    pub seo: ArticleSeoDto,
    pub sponsorship: Option<ArticleSponsorshipDto>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponseDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            category_id: a.category_id,
            category_path: a.canonical_path(),
            slug: a.slug,
            url: a.url,
            title: a.title,
            excerpt: a.excerpt,
            content: a.content,
            images: a.images.into_iter().map(Into::into).collect(),
            author: a.author.map(Into::into),
            seo: a.seo.into(),
            sponsorship: a.sponsorship.map(Into::into),
            published_at: a.published_at,
            updated_at: a.updated_at,
        }
    }
}
