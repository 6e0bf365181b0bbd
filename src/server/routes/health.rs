//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub users: usize,
    pub records: usize,
}

/// GET /health - Liveness plus dataset size.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users: state.dataset.users().len(),
        records: state.dataset.record_count(),
    })
}

#[cfg(test)]
mod tests {
    use crate::server::routes::test_support::get_json;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["users"], 2);
        assert_eq!(body["records"], 3);
    }
}
