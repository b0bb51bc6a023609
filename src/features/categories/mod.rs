//! Category hierarchy feature.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | Category forest (`?flat=true` for a flat list) |
//! | GET | `/api/categories/{identifier}` | Category by id, slug, or encoded slug path |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
