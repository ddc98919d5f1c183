use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    message: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

#[derive(Deserialize)]
pub struct ErrorPageParams {
    message: Option<String>,
}

/// GET /auth/error?message=...
pub async fn auth_error_page(Query(params): Query<ErrorPageParams>) -> Response {
    let template = ErrorPageTemplate {
        message: params
            .message
            .unwrap_or_else(|| "Sorry, something went wrong".to_string()),
    };

    template.into_response()
}

/// Router fallback for unmatched paths.
pub async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}
