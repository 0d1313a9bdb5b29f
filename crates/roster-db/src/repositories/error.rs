//! Error handling utilities for repositories

use roster_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Unique constraint on `members.nick`
pub const MEMBERS_NICK_KEY: &str = "members_nick_key";

/// Case-insensitive unique index on `members.email`
pub const MEMBERS_EMAIL_KEY: &str = "members_email_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the members table to the constraint that fired
pub fn map_member_unique_violation(e: SqlxError, nick: &str) -> DomainError {
    let constraint = e
        .as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint().map(str::to_owned));

    match constraint.as_deref() {
        Some(MEMBERS_EMAIL_KEY) => DomainError::EmailAlreadyExists,
        Some(MEMBERS_NICK_KEY) => DomainError::NickAlreadyExists(nick.to_string()),
        _ => map_db_error(e),
    }
}

/// Create a "member not found" error
pub fn member_not_found(nick: &str) -> DomainError {
    DomainError::MemberNotFound(nick.to_string())
}
