use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::articles::repo_types::Article;
use crate::store::StoreResult;

/// Flat article collection supporting only full replace and full read.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Drop every stored article and store `articles` in their place. Returns the number stored.
    async fn replace_all(&self, articles: &[Article]) -> StoreResult<usize>;
    /// All stored articles in insertion order.
    async fn list_all(&self) -> StoreResult<Vec<Article>>;
}

#[derive(Clone)]
pub struct PgArticleStore {
    db: PgPool,
}

impl PgArticleStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

async fn insert_article_tx(
    tx: &mut Transaction<'_, Postgres>,
    article: &Article,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO articles (title, description, image_url, content, source_url)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&article.title)
    .bind(&article.description)
    .bind(&article.image_url)
    .bind(&article.content)
    .bind(&article.source_url)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn replace_all(&self, articles: &[Article]) -> StoreResult<usize> {
        let mut tx = self.db.begin().await?;
        sqlx::query("DELETE FROM articles").execute(&mut *tx).await?;
        for article in articles {
            insert_article_tx(&mut tx, article).await?;
        }
        tx.commit().await?;
        Ok(articles.len())
    }

    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, Article>(
            r#"
            SELECT title, description, image_url, content, source_url
              FROM articles
             ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
