//! Core types for storybook-admin
//!
//! Domain records shared by every crate, plus the admin session gate.

pub mod constants;
mod env_config;
mod project;
pub mod session_gate;
mod summary;

pub use constants::*;
pub use env_config::{env_parse_with_default, env_required, MissingEnvVar};
pub use project::*;
pub use session_gate::{GateDecision, SessionState};
pub use summary::{CountSummary, ProjectOverview};
