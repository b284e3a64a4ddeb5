use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    error::{AppError, not_found_response},
    pages::certificate_page,
    state::AppState,
};

pub async fn verify_handler(
    State(state): State<Arc<AppState>>,
    Path(certificate_id): Path<String>,
) -> Result<Response, AppError> {
    let certificate_id = parse_certificate_id(&certificate_id)?;

    let Some(cert) = state.store.fetch(certificate_id).await? else {
        return Err(AppError::NotFound);
    };

    #[cfg(feature = "verbose")]
    tracing::info!(
        "Verified certificate {certificate_id} for {}",
        cert.member_name
    );

    let share_url = format!(
        "{}/verify/{certificate_id}",
        state.config.public_url.trim_end_matches('/')
    );

    let page = certificate_page(cert, share_url);

    Ok(Html(page.render()?).into_response())
}

pub async fn not_found_handler() -> Response {
    not_found_response()
}

// Only a well formed UUID can name a certificate; anything else is an
// unknown certificate (404), never a malformed request (400).
fn parse_certificate_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::parse_certificate_id;

    #[test]
    fn test_accepts_canonical_form() {
        assert!(parse_certificate_id("87b98cd4-1d6c-4be2-a30e-7631663ba898").is_ok());
    }

    #[test]
    fn test_normalizes_other_forms() {
        let id = parse_certificate_id("87B98CD41D6C4BE2A30E7631663BA898").unwrap();

        assert_eq!(id.to_string(), "87b98cd4-1d6c-4be2-a30e-7631663ba898");
    }

    #[test]
    fn test_rejects_junk() {
        assert!(parse_certificate_id("not-a-uuid").is_err());
        assert!(parse_certificate_id("").is_err());
        assert!(parse_certificate_id("87b98cd4-1d6c-4be2-a30e").is_err());
    }
}
