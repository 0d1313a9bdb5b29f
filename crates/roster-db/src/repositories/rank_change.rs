//! PostgreSQL implementation of RankChangeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::RankChangeRequest;
use roster_core::error::DomainError;
use roster_core::traits::{RankChangeRepository, RepoResult};

use crate::models::RankChangeRequestModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RankChangeRepository
#[derive(Clone)]
pub struct PgRankChangeRepository {
    pool: PgPool,
}

impl PgRankChangeRepository {
    /// Create a new PgRankChangeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankChangeRepository for PgRankChangeRepository {
    #[instrument(skip(self))]
    async fn has_awaiting(&self, affected_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM rank_change_requests
                WHERE affected_member_id = $1 AND status = 'awaiting'
            )
            ",
        )
        .bind(affected_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, request), fields(kind = %request.kind, affected_id = %request.affected_id))]
    async fn create(&self, request: &RankChangeRequest) -> RepoResult<()> {
        // The partial unique index on awaiting rows turns a concurrent
        // duplicate into a unique violation.
        sqlx::query(
            r"
            INSERT INTO rank_change_requests (id, promoter_member_id, affected_member_id,
                                              previous_rank_id, new_rank_id, kind, reason,
                                              permission, status, promoter_tag, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(request.id)
        .bind(request.promoter_id)
        .bind(request.affected_id)
        .bind(request.previous_rank_id)
        .bind(request.new_rank_id)
        .bind(request.kind.as_str())
        .bind(&request.reason)
        .bind(&request.permission)
        .bind(request.status.as_str())
        .bind(&request.promoter_tag)
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PendingRequestExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_affected(&self, affected_id: Uuid) -> RepoResult<Vec<RankChangeRequest>> {
        let rows = sqlx::query_as::<_, RankChangeRequestModel>(
            r"
            SELECT id, promoter_member_id, affected_member_id, previous_rank_id, new_rank_id,
                   kind, reason, permission, status, promoter_tag, created_at
            FROM rank_change_requests
            WHERE affected_member_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(affected_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(RankChangeRequest::from).collect())
    }
}
