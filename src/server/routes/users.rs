//! User listing endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::AppState;

#[derive(Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub days: usize,
}

/// GET /api/users - Users in the loaded dataset.
pub async fn get_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserSummary>> {
    let users = state
        .dataset
        .users()
        .iter()
        .map(|u| UserSummary {
            id: u.id.clone(),
            name: u.name.clone(),
            days: u.records.len(),
        })
        .collect();

    Json(users)
}
