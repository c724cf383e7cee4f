use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use storybook_core::session_gate::is_protected_path;
use storybook_core::{ADMIN_PATH_PREFIX, LOGIN_PATH, SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE};
use subtle::ConstantTimeEq;

use crate::api_error::ApiError;
use crate::query_types::LoginForm;
use crate::AppState;

/// Where to send the user after login. Only paths inside the admin area are
/// honoured, which also keeps the redirect on this origin.
fn return_path(requested: Option<&str>) -> &str {
    match requested {
        Some(path) if is_protected_path(path) => path,
        _ => ADMIN_PATH_PREFIX,
    }
}

fn password_matches(given: &str, expected: &str) -> bool {
    given.as_bytes().ct_eq(expected.as_bytes()).unwrap_u8() == 1
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let Form(form) = form.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    if !password_matches(&form.password, &state.auth.admin_password) {
        tracing::warn!("rejected admin login attempt");
        return Err(ApiError::Unauthorized("invalid password".to_owned()));
    }
    let session = Cookie::build((SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.auth.secure_cookies);
    let target = return_path(form.redirect.as_deref());
    tracing::info!(redirect = %target, "admin logged in");
    Ok((jar.add(session), Redirect::to(target)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/")), Redirect::to(LOGIN_PATH))
}
