//! Process configuration, read from the environment once at startup.

use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the managed backend (auth + data APIs).
    pub backend_url: String,
    /// Service credential sent with every backend request.
    pub backend_api_key: String,
    /// Public URL of this site, used as the magic-link redirect origin
    /// when the request carries no Origin header.
    pub site_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = env::var("BACKEND_URL").context("BACKEND_URL must be set")?;
        let backend_api_key =
            env::var("BACKEND_API_KEY").context("BACKEND_API_KEY must be set")?;

        let site_url =
            env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            backend_url,
            backend_api_key,
            site_url,
            host,
            port,
        })
    }
}
