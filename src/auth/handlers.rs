use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, TokenResponse},
        extractors::AuthUser,
        services,
    },
    dto::MessageResponse,
    error::AppResult,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn welcome_routes() -> Router<AppState> {
    Router::new().route("/welcome", get(welcome))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    services::register(&state, &payload.username, &payload.password).await?;
    Ok(Json(MessageResponse::new("User registered successfully")))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(payload) = payload?;
    let token = services::login(&state, &payload.username, &payload.password).await?;
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip_all)]
pub async fn welcome(AuthUser(claims): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Welcome, {}!", claims.username)))
}
