//! Service layer for storybook-admin
//!
//! Centralizes business rules between HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod project_service;
mod summary;

pub use error::{ServiceError, SummaryQuery};
pub use project_service::ProjectService;
pub use summary::{characters_with_images, read_project_summary};
