//! # roster-external
//!
//! Adapters for services owned by third parties. Currently the public
//! profile directory the onboarding gate reads mottos from.

mod endpoint;
mod error;
mod payload;
mod profile_directory;

pub use endpoint::ProfileEndpoint;
pub use error::LookupError;
pub use profile_directory::HttpProfileDirectory;
