//! PostgreSQL implementation of click event persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewClick;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for appending click events.
///
/// The `click_events` table carries no foreign key to `links`: a link may
/// be deleted while its analytics rows remain.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert_click(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO click_events (link_id, profile_id, user_agent, referrer, country, device_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(new_click.link_id)
        .bind(new_click.profile_id)
        .bind(&new_click.user_agent)
        .bind(&new_click.referrer)
        .bind(&new_click.country)
        .bind(&new_click.device_type)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
