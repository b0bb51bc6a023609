use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::pagination::PaginationMeta;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<PaginationMeta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
        }
    }
}

/// Error body returned at the request boundary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    /// Canonical reason phrase of `status_code`, e.g. "Not Found"
    pub error: String,
}
