//! # Hosted certificate table
//!
//! The only persistent store this service talks to. One row per issued
//! certificate, keyed by `certificate_id`; rows are written solely by the
//! offline issuer, so every read here is a plain key lookup.
use registry::CertificateStore;

use super::config::Config;

pub fn init_store(config: &Config) -> CertificateStore {
    CertificateStore::new(&config.database_url, &config.database_key)
}
