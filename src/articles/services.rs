use tracing::{info, instrument};

use super::repo_types::Article;
use crate::{error::AppResult, state::AppState};

/// Pull the fixed headline query from the provider and replace the stored collection with it.
///
/// Two concurrent refreshes are not serialized against each other; overlapping calls can
/// leave the union of both result sets.
#[instrument(skip(state))]
pub async fn refresh_articles(state: &AppState) -> AppResult<usize> {
    let items = state.news.top_headlines().await?;
    let articles: Vec<Article> = items.into_iter().map(Article::from).collect();
    let stored = state.articles.replace_all(&articles).await?;
    info!(count = stored, "articles stored");
    Ok(stored)
}

#[instrument(skip(state))]
pub async fn list_articles(state: &AppState) -> AppResult<Vec<Article>> {
    Ok(state.articles.list_all().await?)
}
