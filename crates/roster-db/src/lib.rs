//! # roster-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `roster-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the credential store
//!
//! Uniqueness rules (one awaiting rank request per member, one completion per
//! course and student, one open tag request per member) live in the schema as
//! unique indexes, so concurrent writers cannot both succeed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use roster_db::repositories::PgMemberRepository;
//! use roster_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let members = PgMemberRepository::new(pool);
//!
//!     let alice = members.find_by_nick("Alice").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCompletionRepository, PgCourseRepository, PgCredentialStore, PgMemberRepository,
    PgRankChangeRepository, PgTagRequestRepository,
};
