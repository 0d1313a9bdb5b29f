//! Entity to model mappers
//!
//! Conversions between domain entities (roster-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database writes

mod course;
mod member;
mod rank_change;
mod tag_request;

pub use member::MemberInsert;
pub use rank_change::{parse_kind, parse_status};
