//! PostgreSQL implementation of TagRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::TagRequest;
use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, TagRequestRepository};

use crate::models::TagRequestModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TagRequestRepository
#[derive(Clone)]
pub struct PgTagRequestRepository {
    pool: PgPool,
}

impl PgTagRequestRepository {
    /// Create a new PgTagRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRequestRepository for PgTagRequestRepository {
    #[instrument(skip(self))]
    async fn has_open(&self, owner_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM tag_requests
                WHERE owner_id = $1 AND status IN ('awaiting', 'approved')
            )
            ",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, request), fields(tag = %request.requested_tag))]
    async fn create(&self, request: &TagRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tag_requests (id, owner_id, requested_tag, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(request.id)
        .bind(request.owner_id)
        .bind(&request.requested_tag)
        .bind(request.status.as_str())
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateTagRequest))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<TagRequest>> {
        let rows = sqlx::query_as::<_, TagRequestModel>(
            r"
            SELECT id, owner_id, requested_tag, status, created_at
            FROM tag_requests
            WHERE owner_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TagRequest::from).collect())
    }
}
