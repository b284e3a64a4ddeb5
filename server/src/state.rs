use std::sync::Arc;

use registry::CertificateStore;

use super::{config::Config, database::init_store};

pub struct AppState {
    pub config: Config,
    pub store: CertificateStore,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let store = init_store(&config);

        Arc::new(Self { config, store })
    }
}
