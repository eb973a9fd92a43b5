//! In-memory collaborators for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    articles::{repo::ArticleStore, repo_types::Article},
    auth::{repo::UserStore, repo_types::User},
    news::{FetchError, NewsItem, NewsProvider},
    store::{StoreError, StoreResult},
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(StoreError::Duplicate);
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn replace_all(&self, articles: &[Article]) -> StoreResult<usize> {
        let mut stored = self.articles.write().await;
        *stored = articles.to_vec();
        Ok(stored.len())
    }

    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }
}

/// Article store whose every call fails, for error-path tests.
pub struct BrokenArticleStore;

#[async_trait]
impl ArticleStore for BrokenArticleStore {
    async fn replace_all(&self, _articles: &[Article]) -> StoreResult<usize> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Provider returning a canned headline list, or failing once `fail` is called.
#[derive(Default)]
pub struct StubNews {
    items: RwLock<Option<Vec<NewsItem>>>,
}

impl StubNews {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items: RwLock::new(Some(items)),
        }
    }

    pub async fn set(&self, items: Vec<NewsItem>) {
        *self.items.write().await = Some(items);
    }

    pub async fn fail(&self) {
        *self.items.write().await = None;
    }
}

#[async_trait]
impl NewsProvider for StubNews {
    async fn top_headlines(&self) -> Result<Vec<NewsItem>, FetchError> {
        match self.items.read().await.as_ref() {
            Some(items) => Ok(items.clone()),
            None => Err(FetchError::Provider {
                code: "rateLimited".into(),
                message: "quota exhausted".into(),
            }),
        }
    }
}
