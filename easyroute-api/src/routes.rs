use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use easyroute_domain::Route;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/routes", get(list_routes))
        .route("/v1/routes/{id}", get(get_route))
}

async fn list_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    Json(state.store.read().await.routes().to_vec())
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Route>, AppError> {
    state
        .store
        .read()
        .await
        .get_route_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Route not found: {}", id)))
}
