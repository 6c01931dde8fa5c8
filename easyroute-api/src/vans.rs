use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use easyroute_domain::{Van, VanStatus};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct VanListQuery {
    status: Option<VanStatus>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/vans", get(list_vans))
        .route("/v1/vans/{id}", get(get_van))
}

async fn list_vans(
    State(state): State<AppState>,
    Query(query): Query<VanListQuery>,
) -> Json<Vec<Van>> {
    Json(state.store.read().await.vans_filtered(query.status))
}

async fn get_van(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Van>, AppError> {
    state
        .store
        .read()
        .await
        .get_van_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Van not found: {}", id)))
}
