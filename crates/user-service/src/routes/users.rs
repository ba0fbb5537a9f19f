//! User listing endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: &'static str,
}

pub const USERS: &[UserRecord] = &[UserRecord {
    id: 1,
    name: "Alice",
}];

/// GET /users — lists all users.
#[tracing::instrument]
pub async fn list() -> Json<&'static [UserRecord]> {
    Json(USERS)
}
