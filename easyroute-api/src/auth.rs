use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{Duration, Utc};
use easyroute_domain::{User, UserRole};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::auth::{session_auth_middleware, SessionClaims};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    role: UserRole,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/v1/auth/me", get(me))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            session_auth_middleware,
        ));

    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/register", post(register))
        .merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    state.simulate_latency().await;

    let user = state
        .store
        .read()
        .await
        .authenticate(&req.email, &req.password)?;

    let token = issue_token(&state, &user)?;
    tracing::info!("User {} logged in", user.id);
    Ok(Json(AuthResponse { token }))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    state.simulate_latency().await;

    let user = state
        .store
        .write()
        .await
        .register(&req.name, &req.email, &req.password, req.role)?;

    let token = issue_token(&state, &user)?;
    Ok(Json(AuthResponse { token }))
}

async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .read()
        .await
        .get_user_by_id(&claims.sub)
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("Unknown session subject".to_string()))?;

    Ok(Json(user))
}

fn issue_token(state: &AppState, user: &User) -> Result<String, AppError> {
    let claims = SessionClaims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))
}
