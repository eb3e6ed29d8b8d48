use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The operator never configured the admin credential. Kept distinct from
    /// a credential mismatch so "wrong password" and "forgot to configure"
    /// are distinguishable in the logs.
    #[error("admin credential is not configured")]
    ServerMisconfigured,

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Internal server error")]
    InternalError(String),
}

// anyhow::Error does not implement std::error::Error, so no #[from]
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            AppError::ServerMisconfigured => {
                tracing::error!(
                    "admin login attempted but ADMIN_PASSWORD is not configured"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The server is not configured for admin sign-in.",
                )
            }
            AppError::TemplateError(e) => {
                tracing::error!(error = %e, "failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.",
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        };

        (status_code, Html(message.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misconfiguration_maps_to_500() {
        let response = AppError::ServerMisconfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
