use askama::Template;
use axum::response::Response;

use super::render_template;

/// Public landing page. The portfolio catalog itself is rendered elsewhere;
/// this page only has to exist so the site has a front door.
#[derive(Template)]
#[template(path = "pages/index.html")]
struct IndexTemplate;

/// GET / - Landing page
pub async fn page() -> Response {
    render_template(IndexTemplate)
}
