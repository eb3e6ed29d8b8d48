//! Admin route handlers
//!
//! Everything here sits behind the session guard except the login page,
//! which is the guard's single exemption.

pub mod login;

use askama::Template;
use axum::response::Response;

use super::render_template;

#[derive(Template)]
#[template(path = "pages/admin/dashboard.html")]
struct DashboardTemplate;

/// GET /admin - Admin dashboard
pub async fn dashboard() -> Response {
    render_template(DashboardTemplate)
}
