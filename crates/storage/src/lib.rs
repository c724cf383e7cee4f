//! Storage layer for storybook-admin
//!
//! PostgreSQL (sqlx) and in-memory backends behind async store traits, plus
//! the count-query model the project summary is built on.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod query;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use query::{Column, CountQuery, Filter, FilterValue, Relation};
