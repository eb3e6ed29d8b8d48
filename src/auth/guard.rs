//! Request guard for the admin section
//!
//! The decision itself is a pure function over the request path, the
//! session cookie, and the clock; the axum middleware around it only
//! extracts those inputs and turns the decision into a response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::cookie::SESSION_COOKIE_NAME;
use crate::auth::session::verify_token;
use crate::routes::AppState;

/// Path prefix guarded by the session gate.
pub const ADMIN_PREFIX: &str = "/admin";

/// The one exemption under the prefix. Guarding the login page itself would
/// redirect the login page to the login page, forever.
pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Request proceeds unmodified.
    Allow,
    /// Send the client to the login page instead.
    Redirect(String),
}

/// Decide whether a request may pass the admin gate.
///
/// Unprotected paths and the login exemption always pass. A missing cookie
/// redirects to login with the original path recoverable via `next`; a
/// cookie that fails verification additionally carries a generic
/// `session=invalid` marker. The concrete rejection reason is logged
/// server-side and never distinguishes itself in the response.
pub fn guard_request(path: &str, cookie: Option<&str>, secret: &str, now: u64) -> GuardDecision {
    if !is_protected(path) {
        return GuardDecision::Allow;
    }

    let Some(token) = cookie else {
        tracing::debug!(path, "no session cookie on admin path");
        return GuardDecision::Redirect(login_redirect(path, false));
    };

    match verify_token(secret, token, now) {
        Ok(_) => GuardDecision::Allow,
        Err(reason) => {
            tracing::warn!(path, %reason, "rejecting admin session");
            GuardDecision::Redirect(login_redirect(path, true))
        }
    }
}

fn is_protected(path: &str) -> bool {
    if path == LOGIN_PATH {
        return false;
    }
    // Segment-aware prefix match: "/administrator" is not ours
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

fn login_redirect(path: &str, invalid_session: bool) -> String {
    let mut target = format!("{}?next={}", LOGIN_PATH, urlencoding::encode(path));
    if invalid_session {
        target.push_str("&session=invalid");
    }
    target
}

/// Axum middleware applying [`guard_request`] to every inbound request.
pub async fn admin_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let decision = guard_request(
        request.uri().path(),
        jar.get(SESSION_COOKIE_NAME).map(|cookie| cookie.value()),
        &state.config.auth.session_secret,
        state.clock.now(),
    );

    match decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => Redirect::to(&target).into_response(),
    }
}
