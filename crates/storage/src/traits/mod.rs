//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services depend on
//! capabilities rather than on PostgreSQL.

pub mod character;
pub mod count;
pub mod page;
pub mod project;

pub use character::CharacterStore;
pub use count::CountStore;
pub use page::PageStore;
pub use project::ProjectStore;
