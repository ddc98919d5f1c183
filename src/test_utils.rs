//! Shared helpers for unit tests and integration tests.

pub mod test_helpers {
    use crate::config::AppConfig;
    use crate::AppState;

    pub fn test_config(backend_url: &str) -> AppConfig {
        AppConfig {
            backend_url: backend_url.to_string(),
            backend_api_key: "test-api-key".to_string(),
            site_url: "http://localhost:8080".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }

    /// App state wired against the given backend URL (usually a wiremock
    /// server).
    pub fn test_state(backend_url: &str) -> AppState {
        AppState::new(test_config(backend_url))
    }
}
