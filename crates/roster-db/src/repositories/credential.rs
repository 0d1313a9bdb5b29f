//! Credential store - PostgreSQL-backed identity provider
//!
//! Stores an Argon2id hash per member. Session issuance and login are not
//! part of this service; the table only records that credentials exist.
//! Credentials are written after the member's gate opens, and only for the
//! email the gate was opened with.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use roster_common::hash_password;
use roster_core::error::DomainError;
use roster_core::traits::{IdentityProvider, RepoResult};

use super::error::map_unique_violation;

/// PostgreSQL implementation of IdentityProvider
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Create a new PgCredentialStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgCredentialStore {
    #[instrument(skip(self, email, password))]
    async fn create_credentials(&self, member_id: Uuid, email: &str, password: &str) -> RepoResult<()> {
        let password_hash = hash_password(password)?;

        // Only the email holding the member's open gate may write; a
        // registration that lost the grant race leaves the row untouched.
        let result = sqlx::query(
            r"
            INSERT INTO credentials (member_id, email, password_hash)
            SELECT m.id, $2, $3
            FROM members m
            WHERE m.id = $1 AND m.has_system_access AND m.email = $2
            ON CONFLICT (member_id) DO UPDATE
            SET email = EXCLUDED.email, password_hash = EXCLUDED.password_hash
            ",
        )
        .bind(member_id)
        .bind(email)
        .bind(&password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            warn!(member_id = %member_id, "Credentials refused: gate not held by this email");
            return Err(DomainError::SystemAccessAlreadyGranted);
        }

        info!(member_id = %member_id, "Credentials created");
        Ok(())
    }
}
