use crate::extractor::ExtractedProfile;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Outcome of persisting one extracted profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPage {
    pub page_id: Uuid,
    pub created: bool,
    pub links: usize,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepositoryTrait: Send + Sync {
    /// Upserts the page by slug and replaces its links.
    async fn save_profile(&self, profile: &ExtractedProfile) -> Result<SavedPage>;
}

#[derive(Clone)]
pub struct PageRepository {
    pool: Pool<Postgres>,
}

impl PageRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepositoryTrait for PageRepository {
    async fn save_profile(&self, profile: &ExtractedProfile) -> Result<SavedPage> {
        let mut tx = self.pool.begin().await?;

        // xmax is zero only for freshly inserted rows
        let (page_id, created): (Uuid, bool) = sqlx::query_as(
            r#"
            INSERT INTO pages
                  (slug, title, subtitle, avatar_url, exclusive_preview_image, is_active)
            VALUES ($1,   $2,    $3,       $4,         $5,                      TRUE)
            ON CONFLICT (slug) DO UPDATE
              SET title                   = EXCLUDED.title,
                  subtitle                = EXCLUDED.subtitle,
                  avatar_url              = EXCLUDED.avatar_url,
                  exclusive_preview_image = EXCLUDED.exclusive_preview_image,
                  updated_at              = now()
            RETURNING id, (xmax = 0) AS inserted
            "#,
        )
        .bind(&profile.slug)
        .bind(&profile.title)
        .bind(&profile.subtitle)
        .bind(&profile.avatar_url)
        .bind(&profile.preview_image_url)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM page_links WHERE page_id = $1")
            .bind(page_id)
            .execute(&mut *tx)
            .await?;

        for link in &profile.links {
            sqlx::query(
                r#"
                INSERT INTO page_links (page_id, label, url, sort_order, is_active)
                VALUES ($1, $2, $3, $4, TRUE)
                "#,
            )
            .bind(page_id)
            .bind(&link.label)
            .bind(&link.url)
            .bind(link.sort_order)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(SavedPage {
            page_id,
            created,
            links: profile.links.len(),
        })
    }
}
