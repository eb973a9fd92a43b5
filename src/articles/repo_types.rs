use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::news::NewsItem;

/// Cached article. The storage row id is never selected or exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub source_url: Option<String>,
}

impl From<NewsItem> for Article {
    fn from(item: NewsItem) -> Self {
        Self {
            title: item.title,
            description: item.description,
            image_url: item.url_to_image,
            content: item.content,
            source_url: item.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_provider_fields() {
        let article = Article::from(NewsItem {
            title: Some("t".into()),
            description: None,
            url_to_image: Some("https://img.example/a.png".into()),
            content: Some("c".into()),
            url: Some("https://news.example/a".into()),
        });
        assert_eq!(article.image_url.as_deref(), Some("https://img.example/a.png"));
        assert_eq!(article.source_url.as_deref(), Some("https://news.example/a"));
        assert_eq!(article.description, None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Article {
            image_url: Some("i".into()),
            source_url: Some("s".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["imageUrl"], "i");
        assert_eq!(json["sourceUrl"], "s");
        assert!(json["title"].is_null());
    }
}
