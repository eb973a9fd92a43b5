use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::{repo_types::Article, services};
use crate::{dto::MessageResponse, error::ArticleFailure, state::AppState};

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/fetch-articles", get(fetch_articles))
        .route("/articles", get(list_articles))
}

#[instrument(skip(state))]
pub async fn fetch_articles(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ArticleFailure> {
    services::refresh_articles(&state)
        .await
        .map_err(ArticleFailure::fetching)?;
    Ok(Json(MessageResponse::new("Articles stored successfully")))
}

#[instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ArticleFailure> {
    let articles = services::list_articles(&state)
        .await
        .map_err(ArticleFailure::retrieving)?;
    Ok(Json(articles))
}
