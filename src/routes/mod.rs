use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::auth::guard::admin_guard;
use crate::clock::Clock;
use crate::config::Config;

pub mod admin;
pub mod health;
pub mod index;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Clock,
}

/// Helper to render templates
pub(crate) fn render_template<T: Template>(t: T) -> Response {
    match t.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("Page not found"))
}

/// Create the application router
///
/// The admin guard is layered over the whole router (fallback included), so
/// unknown paths under /admin still redirect to login instead of leaking a
/// 404 to unauthenticated clients.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/admin", get(admin::dashboard))
        .route(
            "/admin/login",
            get(admin::login::get_login).post(admin::login::post_login),
        )
        .route("/admin/logout", post(admin::login::post_logout))
        .fallback(fallback)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            admin_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
