//! Axum middleware applying the admin session gate to every request.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use storybook_core::session_gate::{evaluate, GateDecision};
use storybook_core::SESSION_COOKIE_NAME;

/// Let the request through, or short-circuit with a redirect to the login page.
pub async fn require_admin_session(jar: CookieJar, request: Request, next: Next) -> Response {
    let session = jar.get(SESSION_COOKIE_NAME).map(Cookie::value);
    match evaluate(request.uri().path(), session) {
        GateDecision::Proceed => next.run(request).await,
        GateDecision::Redirect(location) => {
            tracing::debug!(
                path = %request.uri().path(),
                "admin session missing, redirecting to login"
            );
            Redirect::temporary(&location).into_response()
        },
    }
}
