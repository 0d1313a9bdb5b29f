//! Company, course and completion database models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for companies table
#[derive(Debug, Clone, FromRow)]
pub struct CompanyModel {
    pub id: i32,
    pub acronym: String,
    pub name: String,
}

/// Database model for courses table
#[derive(Debug, Clone, FromRow)]
pub struct CourseModel {
    pub id: i32,
    pub company_id: i32,
    pub acronym: String,
    pub name: String,
    pub mandatory: bool,
    pub rank_id: Option<i32>,
}

/// Database model for course_completions table
#[derive(Debug, Clone, FromRow)]
pub struct CourseCompletionModel {
    pub id: Uuid,
    pub course_id: i32,
    pub instructor_member_id: Uuid,
    pub student_member_id: Uuid,
    pub date_applied: NaiveDate,
    pub time_applied: NaiveTime,
    pub created_at: DateTime<Utc>,
}
