use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub public_url: String,
    pub database_url: String,
    pub database_key: String,
}

impl Config {
    pub fn load() -> Self {
        let port = try_load("CERTIFY_PORT", "8080");

        Self {
            port,
            public_url: try_load("CERTIFY_PUBLIC_URL", &format!("http://localhost:{port}")),
            database_url: var("DATABASE_URL").expect("Environment misconfigured!"),
            database_key: read_secret("DATABASE_KEY"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .or_else(|_| var(secret_name))
        .expect("Secrets misconfigured!")
}
