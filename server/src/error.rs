use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use registry::StoreError;
use thiserror::Error;
use tracing::error;

use crate::pages::not_found_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] StoreError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => not_found_response(),
            AppError::Database(e) => {
                error!("Certificate lookup failed: {e}");

                internal_error_response()
            }
            AppError::Render(e) => {
                error!("Template rendering failed: {e}");

                internal_error_response()
            }
        }
    }
}

pub fn not_found_response() -> Response {
    match not_found_page() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Certificate not found").into_response(),
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred while trying to verify the certificate.",
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use registry::StoreError;

    use super::AppError;

    #[test]
    fn test_unknown_certificate_maps_to_404() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let response = AppError::Database(StoreError::EmptyInsert).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
