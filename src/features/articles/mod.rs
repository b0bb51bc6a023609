//! Articles feature.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories/{identifier}/articles` | Paginated article summaries in a category |
//! | GET | `/api/articles/{id}` | Article by legacy numeric id |
//! | GET | `/api/article/{category path}/{slug}` | Article by hierarchical path |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ArticleService;
