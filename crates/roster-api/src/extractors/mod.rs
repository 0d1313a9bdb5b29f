//! Axum extractors for request handling

mod pagination;
mod validated;

pub use pagination::{Pagination, PaginationParams};
pub use validated::ValidatedJson;
