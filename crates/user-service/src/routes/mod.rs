pub mod health;
pub mod users;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Answers every request that no route accepts, including wrong methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "no route matched");
    ApiError::NotFound("not found".to_string())
}
