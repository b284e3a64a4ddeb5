use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod remote;

pub use remote::{CertificateStore, StoreError};

/// One row of the hosted `certificates` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    pub member_name: String,
    pub member_team: String,
    pub certificate_id: Uuid,
    pub certificate_image_url: String,
    pub verification_url: String,
    // Stamped by the database, absent on rows from older batches.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload. `created_at` is left to the database.
#[derive(Debug, Clone, Serialize)]
pub struct NewCertificate {
    pub member_name: String,
    pub member_team: String,
    pub certificate_id: Uuid,
    pub certificate_image_url: String,
    pub verification_url: String,
}
