mod article;

pub use article::{Article, ArticleAuthor, ArticleImage, ArticleSeo, ArticleSponsorship};
