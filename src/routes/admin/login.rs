//! Admin login route handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use constant_time_eq::constant_time_eq;
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::cookie::{expired_session_cookie, session_cookie};
use crate::auth::guard::ADMIN_PREFIX;
use crate::auth::session::issue_token;
use crate::error::AppError;
use crate::routes::{AppState, render_template};

/// Login page template
#[derive(Template)]
#[template(path = "pages/admin/login.html")]
struct LoginPageTemplate {
    error: Option<String>,
    notice: Option<String>,
    next: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    next: Option<String>,
    session: Option<String>,
}

/// GET /admin/login - Show login form
///
/// The guard redirects here with `next` carrying the originally requested
/// path and, for rejected sessions, a generic `session=invalid` marker.
pub async fn get_login(Query(query): Query<LoginQuery>) -> Response {
    let notice = (query.session.as_deref() == Some("invalid"))
        .then(|| "Your session is no longer valid. Please sign in again.".to_string());

    render_template(LoginPageTemplate {
        error: None,
        notice,
        next: sanitize_next(query.next),
    })
}

/// Login form data
#[derive(Deserialize)]
pub struct LoginForm {
    password: String,
    #[serde(default)]
    next: Option<String>,
}

/// POST /admin/login - Handle login submission
pub async fn post_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response), AppError> {
    let auth = &state.config.auth;

    if auth.admin_password.is_empty() {
        // Operator error, not a client error
        return Err(AppError::ServerMisconfigured);
    }

    let next = sanitize_next(form.next);

    // Non-short-circuiting comparison; a near-miss costs the same as a miss
    if !constant_time_eq(form.password.as_bytes(), auth.admin_password.as_bytes()) {
        warn!("failed admin login attempt");
        let page = LoginPageTemplate {
            error: Some("Invalid credentials".to_string()),
            notice: None,
            next,
        };
        return Ok((
            jar,
            (StatusCode::UNAUTHORIZED, Html(page.render()?)).into_response(),
        ));
    }

    let token = issue_token(
        &auth.session_secret,
        auth.session_ttl_days,
        state.clock.now(),
    )?;
    let jar = jar.add(session_cookie(
        token,
        auth.session_ttl_days,
        state.config.server.secure_cookies(),
    ));

    info!("admin logged in");

    // The token travels only in the cookie; the redirect body stays empty
    Ok((jar, Redirect::to(&next).into_response()))
}

/// POST /admin/logout - Clear session cookie
///
/// Stateless sessions have no server-side record to revoke; overwriting the
/// cookie with an already-expired one is the destruction path.
pub async fn post_logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.add(expired_session_cookie(state.config.server.secure_cookies()));
    (jar, Redirect::to("/"))
}

/// Only same-site absolute paths come back out, so the login form cannot be
/// turned into an open redirect.
fn sanitize_next(next: Option<String>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains("..") => {
            path
        }
        _ => ADMIN_PREFIX.to_string(),
    }
}
