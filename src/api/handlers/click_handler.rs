//! Click recording handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::ClickResponse;
use crate::errors::AppResult;

/// Article click event
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordClickRequest {
    /// Title of the opened article
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    #[schema(example = "Rust 2.0 announced", max_length = 255)]
    pub article_title: String,
    /// URL of the opened article
    #[validate(url(message = "Invalid article URL"))]
    #[schema(example = "https://news.example.com/rust-2-0")]
    pub article_url: String,
}

/// Create click routes
pub fn click_routes() -> Router<AppState> {
    Router::new().route("/clicks", post(record_click))
}

/// Record that the authenticated user opened an article
#[utoipa::path(
    post,
    path = "/clicks",
    tag = "Clicks",
    security(("bearer_auth" = [])),
    request_body = RecordClickRequest,
    responses(
        (status = 201, description = "Click recorded", body = ClickResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn record_click(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<RecordClickRequest>,
) -> AppResult<(StatusCode, Json<ClickResponse>)> {
    let click = state
        .click_service
        .record_click(user.id, payload.article_title, payload.article_url)
        .await?;

    Ok((StatusCode::CREATED, Json(ClickResponse::from(click))))
}
