//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::Member;
use roster_core::error::DomainError;
use roster_core::traits::{MemberRepository, RepoResult};

use crate::mappers::MemberInsert;
use crate::models::MemberModel;

use super::error::{
    map_db_error, map_member_unique_violation, map_unique_violation, member_not_found,
};

const MEMBER_COLUMNS: &str = "id, nick, email, rank_id, active, has_system_access, has_contract, \
                              tag, promoter_tag, created_at, updated_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1");
        let result = sqlx::query_as::<_, MemberModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, MemberModel>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_nick(&self, nick: &str) -> RepoResult<Option<Member>> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE nick = $1");
        let result = sqlx::query_as::<_, MemberModel>(&query)
            .bind(nick)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE LOWER(email) = LOWER($1)");
        let result = sqlx::query_as::<_, MemberModel>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, member), fields(nick = %member.nick))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        let insert = MemberInsert::new(member);

        sqlx::query(
            r"
            INSERT INTO members (id, nick, email, rank_id, active, has_system_access, has_contract,
                                 tag, promoter_tag, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(insert.id)
        .bind(insert.nick)
        .bind(insert.email)
        .bind(insert.rank_id)
        .bind(insert.active)
        .bind(insert.has_system_access)
        .bind(insert.has_contract)
        .bind(insert.tag)
        .bind(insert.promoter_tag)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_member_unique_violation(e, &member.nick))?;

        Ok(())
    }

    #[instrument(skip(self, member), fields(nick = %member.nick))]
    async fn create_if_absent(&self, member: &Member) -> RepoResult<bool> {
        let insert = MemberInsert::new(member);

        let result = sqlx::query(
            r"
            INSERT INTO members (id, nick, email, rank_id, active, has_system_access, has_contract,
                                 tag, promoter_tag, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (nick) DO NOTHING
            ",
        )
        .bind(insert.id)
        .bind(insert.nick)
        .bind(insert.email)
        .bind(insert.rank_id)
        .bind(insert.active)
        .bind(insert.has_system_access)
        .bind(insert.has_contract)
        .bind(insert.tag)
        .bind(insert.promoter_tag)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_member_unique_violation(e, &member.nick))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, member), fields(nick = %member.nick))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET rank_id = $2, active = $3, has_contract = $4, tag = $5, promoter_tag = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(member.id)
        .bind(member.rank_id)
        .bind(member.active)
        .bind(member.has_contract)
        .bind(&member.tag)
        .bind(&member.promoter_tag)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(&member.nick));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, nick: &str, active: bool) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET active = $2, updated_at = NOW()
            WHERE nick = $1
            ",
        )
        .bind(nick)
        .bind(active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, email))]
    async fn grant_system_access(&self, id: Uuid, email: &str) -> RepoResult<()> {
        // Conditional on the gate still being closed, so two concurrent
        // registrations cannot both succeed.
        let result = sqlx::query(
            r"
            UPDATE members
            SET email = $2, has_system_access = TRUE, updated_at = NOW()
            WHERE id = $1 AND has_system_access = FALSE
            ",
        )
        .bind(id)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SystemAccessAlreadyGranted);
        }

        Ok(())
    }

    #[instrument(skip(self, email, previous_email))]
    async fn revoke_system_access(
        &self,
        id: Uuid,
        email: &str,
        previous_email: Option<&str>,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE members
            SET email = $3, has_system_access = FALSE, updated_at = NOW()
            WHERE id = $1 AND has_system_access = TRUE AND email = $2
            ",
        )
        .bind(id)
        .bind(email)
        .bind(previous_email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, active: Option<bool>, limit: i64, offset: i64) -> RepoResult<Vec<Member>> {
        let query = format!(
            r"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE ($1::BOOLEAN IS NULL OR active = $1)
            ORDER BY rank_id DESC, nick ASC
            LIMIT $2 OFFSET $3
            "
        );
        let rows = sqlx::query_as::<_, MemberModel>(&query)
            .bind(active)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }
}
