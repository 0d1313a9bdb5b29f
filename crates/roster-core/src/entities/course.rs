//! Companies, their courses, and course completions

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Acronyms of courses that may provision an unknown student
pub const FOUNDATIONAL_COURSES: [&str; 2] = ["CFI", "CFS"];

/// Company whose courses are addressed by bare acronym on the legacy path
pub const LEGACY_COMPANY_ACRONYM: &str = "EFB";

/// Organizational sub-unit that owns a set of courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i32,
    pub acronym: String,
    pub name: String,
}

/// Course entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub company_id: i32,
    pub acronym: String,
    pub name: String,
    pub mandatory: bool,
    /// Minimum rank expected to attend, informational only
    pub rank_id: Option<i32>,
}

impl Course {
    /// Whether completing this course may auto-provision the student
    pub fn is_foundational(&self) -> bool {
        FOUNDATIONAL_COURSES
            .iter()
            .any(|acronym| self.acronym.eq_ignore_ascii_case(acronym))
    }
}

/// A student's completion of a course, recorded once per (course, student)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCompletion {
    pub id: Uuid,
    pub course_id: i32,
    pub instructor_id: Uuid,
    pub student_id: Uuid,
    pub date_applied: NaiveDate,
    pub time_applied: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl CourseCompletion {
    pub fn new(
        course_id: i32,
        instructor_id: Uuid,
        student_id: Uuid,
        date_applied: NaiveDate,
        time_applied: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            instructor_id,
            student_id,
            date_applied,
            time_applied,
            created_at: Utc::now(),
        }
    }
}

/// Parse an application date in `YYYY-MM-DD` form
pub fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::ValidationError(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Parse an application time in `HH:MM` or `HH:MM:SS` form
pub fn parse_time(raw: &str) -> Result<NaiveTime, DomainError> {
    let raw_trimmed = raw.trim();
    NaiveTime::parse_from_str(raw_trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S"))
        .map_err(|_| DomainError::ValidationError(format!("invalid time '{raw}', expected HH:MM")))
}
