//! Content resolution engine.
//!
//! Splits hierarchical article paths, classifies category identifiers, and
//! resolves both against a [`ContentRepository`].

mod path;
mod postgres;
mod repository;
mod resolver;

pub use postgres::PgContentRepository;
pub use repository::ContentRepository;
pub use resolver::ContentResolver;
