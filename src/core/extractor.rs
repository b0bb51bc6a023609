use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Path extractor whose rejection is a 404 in the standard error body.
///
/// A path parameter that does not deserialize (`/api/articles/abc`) cannot
/// name an existing record.
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());
                Err(AppError::NotFound(format!(
                    "Resource '{}' not found",
                    parts.uri.path()
                )))
            }
        }
    }
}

/// Query extractor whose rejection is a 400 in the standard error body
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(format!(
                "Invalid query parameters: {}",
                rejection.body_text()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct FlagQuery {
        #[serde(default)]
        flat: bool,
    }

    fn parts(uri: &str) -> Parts {
        Request::builder().uri(uri).body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_query_rejection_is_validation_error() {
        let mut parts = parts("/api/categories?flat=maybe");
        let result = AppQuery::<FlagQuery>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut parts = self::parts("/api/categories?flat=true");
        let AppQuery(query) = AppQuery::<FlagQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(query.flat);
    }

    #[tokio::test]
    async fn test_path_without_route_params_is_not_found() {
        // Outside a router there are no matched params, so extraction fails
        let mut parts = parts("/api/articles/abc");
        let result = AppPath::<i64>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
