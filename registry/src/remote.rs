//! # Hosted certificate table
//!
//! The single source of truth for issued certificates, reached over the
//! hosting provider's REST interface.
//!
//! ## Requirements
//!
//! - One row per issued certificate, keyed by `certificate_id`
//! - Key lookups only, no scans or full-text queries
//! - Small dataset, low tens of rows per batch run
//!
//! ## Access
//!
//! - `GET  /rest/v1/certificates?certificate_id=eq.<id>&select=*&limit=1`
//! - `POST /rest/v1/certificates` with `Prefer: return=representation`
//! - Both carry the service key as `apikey` and bearer token
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use uuid::Uuid;

use crate::{Certificate, NewCertificate};

const TABLE_PATH: &str = "/rest/v1/certificates";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("table returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("insert returned no rows")]
    EmptyInsert,
}

pub struct CertificateStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CertificateStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Looks up a single certificate by id. `Ok(None)` means the table has
    /// no such row, which callers surface as an unknown certificate.
    pub async fn fetch(&self, certificate_id: Uuid) -> Result<Option<Certificate>, StoreError> {
        let filter = id_filter(certificate_id);

        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("certificate_id", filter.as_str()),
                ("select", "*"),
                ("limit", "1"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let rows: Vec<Certificate> = check_status(response).await?.json().await?;

        Ok(rows.into_iter().next())
    }

    pub async fn insert(&self, record: &NewCertificate) -> Result<Certificate, StoreError> {
        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await?;

        let mut rows: Vec<Certificate> = check_status(response).await?.json().await?;

        rows.pop().ok_or(StoreError::EmptyInsert)
    }

    fn table_url(&self) -> String {
        format!("{}{}", self.base_url, TABLE_PATH)
    }
}

fn id_filter(certificate_id: Uuid) -> String {
    format!("eq.{}", certificate_id.as_hyphenated())
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status { status, body })
}
