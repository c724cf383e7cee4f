//! Login form served at `/login`.
//!
//! A static page; the inline script copies the `redirect` query parameter into
//! the form so a successful login returns the user to where they started.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the login page
pub const LOGIN_HTML: &str = include_str!("login.html");

pub async fn serve_login() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(LOGIN_HTML))
        .into_response()
}
