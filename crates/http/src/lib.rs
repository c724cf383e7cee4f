//! HTTP server for storybook-admin.
//!
//! Public login/logout routes plus a JSON admin API under `/admin`, every
//! request passing through the session gate.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod handlers;
mod login_page;
mod query_types;
mod session_gate;

use std::sync::Arc;

use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Router,
};
use storybook_service::ProjectService;
use tower_http::trace::TraceLayer;

use crate::api_error::ApiError;
pub use crate::session_gate::require_admin_session;

/// Login configuration.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// The only password accepted by `POST /login`.
    pub admin_password: String,
    /// Mark the session cookie `Secure` (HTTPS deployments).
    pub secure_cookies: bool,
}

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Project, page and character operations plus summaries
    pub project_service: Arc<ProjectService>,
    /// Login settings
    pub auth: AuthSettings,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/login", get(login_page::serve_login).post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/admin", get(handlers::projects::dashboard))
        .route(
            "/admin/projects",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/admin/projects/{id}",
            get(handlers::projects::get_project)
                .put(handlers::projects::update_project)
                .delete(handlers::projects::delete_project),
        )
        .route("/admin/projects/{id}/summary", get(handlers::projects::project_summary))
        .route(
            "/admin/projects/{id}/pages",
            get(handlers::pages::list_pages).post(handlers::pages::create_page),
        )
        .route(
            "/admin/pages/{id}",
            get(handlers::pages::get_page)
                .put(handlers::pages::update_page)
                .delete(handlers::pages::delete_page),
        )
        .route(
            "/admin/projects/{id}/characters",
            get(handlers::characters::list_characters)
                .post(handlers::characters::create_character),
        )
        .route(
            "/admin/characters/{id}",
            get(handlers::characters::get_character)
                .put(handlers::characters::update_character)
                .delete(handlers::characters::delete_character),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(require_admin_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
