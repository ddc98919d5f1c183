//! Routing middleware that marks the auth flow paths as dynamically
//! rendered. Everything else passes through unchanged.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Path prefixes whose responses must be produced per-request rather than
/// served from a static cache: the callback consumes a one-time token, and
/// the login/error pages render request-specific state.
const DYNAMIC_PREFIXES: &[&str] = &["/auth/callback", "/auth/login", "/auth/error"];

/// Pure predicate over the request path. No side effects.
pub fn is_dynamic_path(path: &str) -> bool {
    DYNAMIC_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

pub async fn dynamic_rendering_middleware(request: Request<Body>, next: Next) -> Response {
    let dynamic = is_dynamic_path(request.uri().path());

    let mut response = next.run(request).await;

    if dynamic {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}
