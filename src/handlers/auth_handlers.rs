//! Auth proxy handlers. Every operation is a single delegation to the
//! managed backend; no session state is kept on this side.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Json, Redirect},
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Deserialize)]
pub struct MagicLinkRequest {
    email: Option<String>,
}

#[derive(Deserialize)]
pub struct CallbackParams {
    token_hash: Option<String>,
    #[serde(rename = "type")]
    otp_type: Option<String>,
}

/// POST /auth/magic-link
///
/// Asks the backend to email a one-time sign-in link. Duplicate calls send
/// duplicate emails; there is no idempotency guarantee.
pub async fn magic_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MagicLinkRequest>,
) -> Result<Json<Value>> {
    let email = request.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }

    // The link must bring the browser back to the origin it signed in from
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(&state.config.site_url);
    let redirect_to = format!("{}/auth/callback", origin.trim_end_matches('/'));

    state.backend.send_magic_link(email, &redirect_to).await?;

    Ok(Json(
        json!({ "message": "Check your email for the sign-in link" }),
    ))
}

/// GET /auth/callback?token_hash=...&type=email
///
/// Verifies the one-time token and sends the browser home on success. Every
/// failure class, expected or not, lands on the error redirect so the
/// browser is never left on a broken page.
pub async fn callback_handler(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    match verify_callback(&state, params).await {
        Ok(()) => Redirect::to("/"),
        Err(err) => {
            let message = match err {
                AppError::Validation(msg) | AppError::Upstream(msg) => msg,
                AppError::Internal => "Verification failed".to_string(),
            };
            error_redirect(&message)
        }
    }
}

async fn verify_callback(state: &AppState, params: CallbackParams) -> Result<()> {
    let token_hash = params
        .token_hash
        .filter(|hash| !hash.is_empty())
        .ok_or_else(|| AppError::Validation("Missing confirmation token".to_string()))?;

    match params.otp_type.as_deref() {
        Some("email") => {}
        _ => {
            return Err(AppError::Validation(
                "Invalid confirmation type".to_string(),
            ))
        }
    }

    state.backend.verify_otp(&token_hash, "email").await?;
    Ok(())
}

fn error_redirect(message: &str) -> Redirect {
    Redirect::to(&format!(
        "/auth/error?message={}",
        urlencoding::encode(message)
    ))
}

/// POST /auth/logout
///
/// Forwards the caller's bearer token to the backend's sign-out endpoint.
/// There is no local session store to clear.
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    state.backend.sign_out(bearer).await?;

    Ok(Json(json!({ "message": "Signed out" })))
}
