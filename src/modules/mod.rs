//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the content repository and the resolution logic built on it.

pub mod content;
