//! Static route tables.
//!
//! Each feature declares its endpoints as a `&'static [RouteSpec<S>]` and
//! hands it to [`build_router`], which is the only place routes are
//! registered.

use axum::{routing::MethodRouter, Router};

/// What a caller must hold to reach a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Anyone, no credentials
    Public,
}

pub struct RouteSpec<S> {
    pub path: &'static str,
    pub capability: Capability,
    pub handler: fn() -> MethodRouter<S>,
}

/// Register every route of `table` against `state`
pub fn build_router<S>(table: &[RouteSpec<S>], state: S) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    table
        .iter()
        .fold(Router::new(), |router, spec| {
            match spec.capability {
                Capability::Public => {
                    tracing::debug!("Registering public route {}", spec.path);
                }
            }
            router.route(spec.path, (spec.handler)())
        })
        .with_state(state)
}
