//! Shared constants for storybook-admin.
//!
//! Cookie names, route prefixes and pool limits used across crates.

/// Name of the admin session cookie.
///
/// Renaming it invalidates every session issued under the old name.
pub const SESSION_COOKIE_NAME: &str = "admin_session_v2";

/// The only cookie value that counts as an authenticated session.
pub const SESSION_COOKIE_VALUE: &str = "true";

/// Route prefix guarded by the session gate.
pub const ADMIN_PATH_PREFIX: &str = "/admin";

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the originally requested path through login.
pub const REDIRECT_PARAM: &str = "redirect";

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Env var overriding [`PG_POOL_MAX_CONNECTIONS`].
pub const PG_MAX_CONNECTIONS_ENV: &str = "STORYBOOK_PG_MAX_CONNECTIONS";

/// Env var toggling the `Secure` attribute on the session cookie.
pub const SECURE_COOKIES_ENV: &str = "STORYBOOK_SECURE_COOKIES";

/// PostgreSQL connection string. Optional for `serve`, required elsewhere.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Password accepted by the login form.
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";
