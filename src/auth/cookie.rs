//! Session cookie policy
//!
//! The cookie is a transport artifact, not a stored entity: created at
//! login, read by the guard, destroyed only by being overwritten.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the admin session token
pub const SESSION_COOKIE_NAME: &str = "admin-session";

/// Build the session cookie carrying a freshly issued token.
///
/// `Max-Age` mirrors the token ttl so the browser drops the cookie around
/// the time the server would stop honoring it anyway. `secure` follows the
/// deployment scheme (https only).
pub fn session_cookie<'a>(token: String, ttl_days: u64, secure: bool) -> Cookie<'a> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(ttl_days as i64))
        .build()
}

/// An already-expired overwrite of the session cookie, used by logout.
pub fn expired_session_cookie<'a>(secure: bool) -> Cookie<'a> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}
