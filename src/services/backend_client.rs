//! HTTP client for the managed backend.
//!
//! The backend exposes two API families under one base URL: the auth API
//! (`/auth/v1/*`, OTP dispatch, OTP verification, sign-out) and the data API
//! (`/rest/v1/*`, queryable record collections). One `BackendClient` is
//! constructed at process start and shared read-only across handlers; the
//! underlying `reqwest::Client` pools connections and is safe for concurrent
//! use.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::models::fund::FundRecord;

/// Errors produced by backend calls
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Transport-level failure: connection refused, timeout, TLS, etc.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. `message` is the
    /// human-readable error extracted from the response body.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The backend answered 2xx but the body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Asks the backend to email a one-time sign-in link. `redirect_to` is
    /// the callback URL the link will send the browser back to.
    pub async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), BackendError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/otp", self.base_url))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&json!({ "email": email, "create_user": true }))
            .send()
            .await?;

        Self::check(response).await.map(|_| ())
    }

    /// Verifies a one-time token by hash and type, establishing a session on
    /// the backend side. Only success/failure is relayed; the session
    /// credential itself is never parsed or stored here.
    pub async fn verify_otp(&self, token_hash: &str, otp_type: &str) -> Result<(), BackendError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/verify", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&json!({ "type": otp_type, "token_hash": token_hash }))
            .send()
            .await?;

        Self::check(response).await.map(|_| ())
    }

    /// Invalidates the current session. The caller's bearer token is
    /// forwarded when present; the service credential is used otherwise.
    pub async fn sign_out(&self, bearer: Option<&str>) -> Result<(), BackendError> {
        let token = bearer.unwrap_or(&self.api_key);

        let response = self
            .client
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        Self::check(response).await.map(|_| ())
    }

    /// Fetches every record of the `funds` collection, ordered by ascending
    /// id on the backend side.
    pub async fn list_funds(&self) -> Result<Vec<FundRecord>, BackendError> {
        let response = self
            .client
            .get(format!("{}/rest/v1/funds", self.base_url))
            .query(&[("select", "*"), ("order", "id.asc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = Self::check(response).await?;
        response
            .json::<Vec<FundRecord>>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Upstream {
            status: status.as_u16(),
            message: extract_error_message(status, &body),
        })
    }
}

/// Pulls the human-readable message out of a backend error body. The auth
/// and data APIs disagree on the key name, so the known candidates are tried
/// in order before falling back to the raw body or the bare status.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "error_description", "message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Backend returned status {}", status.as_u16())
    } else {
        trimmed.to_string()
    }
}
