//! PostgreSQL implementation of CompletionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::CourseCompletion;
use roster_core::error::DomainError;
use roster_core::traits::{CompletionRepository, RepoResult};

use crate::models::CourseCompletionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CompletionRepository
#[derive(Clone)]
pub struct PgCompletionRepository {
    pool: PgPool,
}

impl PgCompletionRepository {
    /// Create a new PgCompletionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompletionRepository for PgCompletionRepository {
    #[instrument(skip(self))]
    async fn exists(&self, course_id: i32, student_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM course_completions
                WHERE course_id = $1 AND student_member_id = $2
            )
            ",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, completion), fields(course_id = completion.course_id))]
    async fn create(&self, completion: &CourseCompletion) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO course_completions (id, course_id, instructor_member_id, student_member_id,
                                            date_applied, time_applied, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(completion.id)
        .bind(completion.course_id)
        .bind(completion.instructor_id)
        .bind(completion.student_id)
        .bind(completion.date_applied)
        .bind(completion.time_applied)
        .bind(completion.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyCompleted))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<CourseCompletion>> {
        let rows = sqlx::query_as::<_, CourseCompletionModel>(
            r"
            SELECT id, course_id, instructor_member_id, student_member_id,
                   date_applied, time_applied, created_at
            FROM course_completions
            WHERE student_member_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CourseCompletion::from).collect())
    }
}
