//! Admin route guard.
//!
//! A pure decision over `(path, session cookie value)`. The HTTP layer feeds it
//! the request path and the raw cookie and acts on the returned [`GateDecision`].

use crate::constants::{ADMIN_PATH_PREFIX, LOGIN_PATH, REDIRECT_PARAM, SESSION_COOKIE_VALUE};

/// Authentication state derived from the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    /// The one truthiness rule: authenticated iff the value is exactly `"true"`.
    ///
    /// Case-sensitive; absent, empty, `"false"` and `"TRUE"` are all unauthenticated.
    pub fn from_cookie(value: Option<&str>) -> Self {
        match value {
            Some(SESSION_COOKIE_VALUE) => Self::Authenticated,
            _ => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through unchanged.
    Proceed,
    /// Short-circuit with a redirect to this location.
    Redirect(String),
}

/// Whether `path` is the admin prefix or nested beneath it.
///
/// Segment-aware: `/admin` and `/admin/x` match, `/admin2` and `/administrator` do not.
pub fn is_protected_path(path: &str) -> bool {
    match path.strip_prefix(ADMIN_PATH_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Login location that returns the user to `path` afterwards.
pub fn login_redirect_location(path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
}

/// Decide whether a request for `path` carrying `session_cookie` may proceed.
pub fn evaluate(path: &str, session_cookie: Option<&str>) -> GateDecision {
    if !is_protected_path(path) {
        return GateDecision::Proceed;
    }
    if SessionState::from_cookie(session_cookie).is_authenticated() {
        GateDecision::Proceed
    } else {
        GateDecision::Redirect(login_redirect_location(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn redirect_for(path: &str) -> GateDecision {
        GateDecision::Redirect(login_redirect_location(path))
    }

    #[test]
    fn admin_root_and_nested_are_protected() {
        assert!(is_protected_path("/admin"));
        assert!(is_protected_path("/admin/"));
        assert!(is_protected_path("/admin/dashboard"));
        assert!(is_protected_path("/admin/projects/abc/pages"));
    }

    #[test]
    fn character_prefix_siblings_are_not_protected() {
        assert!(!is_protected_path("/administrator"));
        assert!(!is_protected_path("/admin2"));
        assert!(!is_protected_path("/"));
        assert!(!is_protected_path("/login"));
        assert!(!is_protected_path("/api/admin"));
    }

    #[test]
    fn only_exact_true_authenticates() {
        assert_eq!(SessionState::from_cookie(Some("true")), SessionState::Authenticated);
        for value in [None, Some(""), Some("false"), Some("TRUE"), Some("True"), Some(" true")] {
            let state = SessionState::from_cookie(value);
            assert_eq!(state, SessionState::Unauthenticated, "{value:?}");
        }
    }

    #[test]
    fn denied_request_redirects_to_login_with_encoded_path() {
        assert_eq!(
            evaluate("/admin/dashboard", Some("false")),
            GateDecision::Redirect("/login?redirect=%2Fadmin%2Fdashboard".to_owned())
        );
        assert_eq!(
            evaluate("/admin", None),
            GateDecision::Redirect("/login?redirect=%2Fadmin".to_owned())
        );
    }

    #[test]
    fn redirect_value_decodes_back_to_path() {
        let path = "/admin/projects/a b&c";
        let GateDecision::Redirect(location) = evaluate(path, None) else {
            panic!("expected redirect");
        };
        let query = location.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(decoded, vec![(REDIRECT_PARAM.to_owned(), path.to_owned())]);
    }

    #[test]
    fn authenticated_admin_request_proceeds() {
        assert_eq!(evaluate("/admin/projects", Some("true")), GateDecision::Proceed);
    }

    fn cookie_strategy() -> impl Strategy<Value = Option<String>> {
        proptest::option::of(".{0,12}")
    }

    proptest! {
        #[test]
        fn unprotected_paths_always_proceed(
            tail in "[a-z0-9/_-]{0,24}",
            cookie in cookie_strategy(),
        ) {
            let path = format!("/x{tail}");
            prop_assert_eq!(evaluate(&path, cookie.as_deref()), GateDecision::Proceed);
        }

        #[test]
        fn protected_paths_with_true_cookie_proceed(tail in "(/[a-z0-9_-]{1,8}){0,4}") {
            let path = format!("/admin{tail}");
            prop_assert_eq!(evaluate(&path, Some("true")), GateDecision::Proceed);
        }

        #[test]
        fn protected_paths_with_other_cookie_redirect(
            tail in "(/[a-z0-9_-]{1,8}){0,4}",
            cookie in cookie_strategy()
                .prop_filter("not the truthy literal", |c| c.as_deref() != Some("true")),
        ) {
            let path = format!("/admin{tail}");
            prop_assert_eq!(evaluate(&path, cookie.as_deref()), redirect_for(&path));
        }

        #[test]
        fn decision_is_deterministic(path in "/[a-z/]{0,16}", cookie in cookie_strategy()) {
            prop_assert_eq!(evaluate(&path, cookie.as_deref()), evaluate(&path, cookie.as_deref()));
        }
    }
}
