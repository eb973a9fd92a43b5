use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::NewsConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("news provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("news provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("news provider error ({code}): {message}")]
    Provider { code: String, message: String },
}

/// One article as delivered by the provider. Fields we do not keep are dropped at decode time.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url_to_image: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(&self) -> Result<Vec<NewsItem>, FetchError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<NewsItem>,
    code: Option<String>,
    message: Option<String>,
}

/// NewsAPI `top-headlines` client for a single fixed country.
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    country: String,
}

impl NewsApiClient {
    pub fn new(cfg: &NewsConfig) -> Result<Self, FetchError> {
        // NewsAPI rejects requests that carry no User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            country: cfg.country.clone(),
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    #[instrument(skip(self), fields(country = %self.country))]
    async fn top_headlines(&self) -> Result<Vec<NewsItem>, FetchError> {
        let response = self
            .client
            .get(format!("{}/top-headlines", self.base_url))
            .query(&[("country", self.country.as_str())])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<HeadlinesResponse>(&body) {
                if let Some(message) = err.message {
                    return Err(FetchError::Provider {
                        code: err.code.unwrap_or_else(|| status.as_u16().to_string()),
                        message,
                    });
                }
            }
            return Err(FetchError::Status { status, body });
        }

        let resp: HeadlinesResponse = response.json().await?;
        if resp.status != "ok" {
            return Err(FetchError::Provider {
                code: resp.code.unwrap_or_else(|| resp.status.clone()),
                message: resp.message.unwrap_or_default(),
            });
        }

        debug!(count = resp.articles.len(), "headlines fetched");
        Ok(resp.articles)
    }
}
