use askama::Template;
use registry::Certificate;

#[derive(Template)]
#[template(path = "certificate.html")]
pub struct CertificatePage {
    pub cert: Certificate,
    pub share_url: String,
    pub issued_on: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;

/// Builds the card for a verified certificate. `issued_on` stays empty when
/// the row predates the `created_at` column.
pub fn certificate_page(cert: Certificate, share_url: String) -> CertificatePage {
    let issued_on = cert
        .created_at
        .map(|ts| ts.format("%B %-d, %Y").to_string())
        .unwrap_or_default();

    CertificatePage {
        cert,
        share_url,
        issued_on,
    }
}

pub fn not_found_page() -> Result<String, askama::Error> {
    NotFoundPage.render()
}

#[cfg(test)]
mod tests {
    use askama::Template;
    use chrono::{TimeZone, Utc};
    use registry::Certificate;
    use uuid::Uuid;

    use super::{certificate_page, not_found_page};

    fn sample(with_date: bool) -> Certificate {
        Certificate {
            member_name: "Grace Liu".to_string(),
            member_team: "Head, Creative & Content Team".to_string(),
            certificate_id: Uuid::parse_str("87b98cd4-1d6c-4be2-a30e-7631663ba898").unwrap(),
            certificate_image_url: "https://example.com/certs/grace_liu.pdf".to_string(),
            verification_url:
                "https://certify.example.com/verify/87b98cd4-1d6c-4be2-a30e-7631663ba898"
                    .to_string(),
            created_at: with_date.then(|| Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_card_shows_member_and_id() {
        let page = certificate_page(
            sample(true),
            "https://certify.example.com/verify/87b98cd4-1d6c-4be2-a30e-7631663ba898".to_string(),
        );
        let html = page.render().unwrap();

        assert!(html.contains("Grace Liu"));
        assert!(html.contains("Head, Creative &amp; Content Team"));
        assert!(html.contains("87b98cd4-1d6c-4be2-a30e-7631663ba898"));
        assert!(html.contains("Issued on March 1, 2025"));
    }

    #[test]
    fn test_card_without_issue_date() {
        let page = certificate_page(sample(false), "https://example.com/verify/x".to_string());
        let html = page.render().unwrap();

        assert!(!html.contains("Issued on"));
    }

    #[test]
    fn test_share_link_is_urlencoded() {
        let page = certificate_page(
            sample(true),
            "https://certify.example.com/verify/abc".to_string(),
        );
        let html = page.render().unwrap();

        assert!(html.contains("https%3A%2F%2Fcertify.example.com%2Fverify%2Fabc"));
    }

    #[test]
    fn test_not_found_page_renders() {
        let html = not_found_page().unwrap();

        assert!(html.contains("Certificate Not Found"));
    }
}
