//! PostgreSQL implementation of CourseRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{Company, Course};
use roster_core::traits::{CourseRepository, RepoResult};

use crate::models::{CompanyModel, CourseModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CourseRepository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[i32]) -> RepoResult<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT id, company_id, acronym, name, mandatory, rank_id
            FROM courses
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_in_company(&self, course_id: i32, company_id: i32) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT id, company_id, acronym, name, mandatory, rank_id
            FROM courses
            WHERE id = $1 AND company_id = $2
            ",
        )
        .bind(course_id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn find_by_acronym(
        &self,
        company_acronym: &str,
        course_acronym: &str,
    ) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT c.id, c.company_id, c.acronym, c.name, c.mandatory, c.rank_id
            FROM courses c
            JOIN companies co ON co.id = c.company_id
            WHERE UPPER(co.acronym) = UPPER($1) AND UPPER(c.acronym) = UPPER($2)
            ",
        )
        .bind(company_acronym)
        .bind(course_acronym)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn find_company(&self, id: i32) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, acronym, name FROM companies WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self))]
    async fn find_company_by_acronym(&self, acronym: &str) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, acronym, name FROM companies WHERE UPPER(acronym) = UPPER($1)
            ",
        )
        .bind(acronym)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self))]
    async fn list_by_company(&self, company_id: i32) -> RepoResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseModel>(
            r"
            SELECT id, company_id, acronym, name, mandatory, rank_id
            FROM courses
            WHERE company_id = $1
            ORDER BY id
            ",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}
