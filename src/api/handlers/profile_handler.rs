//! Profile and interest handlers.
//!
//! All routes here sit behind the session middleware; the acting user
//! comes from the request extensions.

use axum::{
    extract::State,
    response::Json,
    routing::{get, patch, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{InterestResponse, ProfileView, UpdateProfile, UserResponse};
use crate::errors::AppResult;

/// Interest selection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetInterestsRequest {
    /// Interest names to select; unknown names are ignored
    #[schema(example = json!(["Sports", "Tech"]))]
    pub interests: Vec<String>,
}

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", patch(edit_profile))
        .route("/profile/interests", put(set_interests))
        .route("/interests", get(list_interests))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile with interests and click history", body = ProfileView),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ProfileView>> {
    let profile = state.profile_service.get_profile(user.id).await?;

    Ok(Json(profile))
}

/// Partially update the authenticated user's profile
#[utoipa::path(
    patch,
    path = "/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Validation error or unknown field"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn edit_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateProfile>,
) -> AppResult<Json<UserResponse>> {
    let updated = state.profile_service.edit_profile(user.id, payload).await?;

    Ok(Json(UserResponse::from(updated)))
}

/// Replace the authenticated user's interest set
#[utoipa::path(
    put,
    path = "/profile/interests",
    tag = "Profile",
    security(("bearer_auth" = [])),
    request_body = SetInterestsRequest,
    responses(
        (status = 200, description = "Resolved interest set after replacement", body = [InterestResponse]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn set_interests(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<SetInterestsRequest>,
) -> AppResult<Json<Vec<InterestResponse>>> {
    let interests = state
        .profile_service
        .set_interests(user.id, payload.interests)
        .await?;

    Ok(Json(interests.into_iter().map(Into::into).collect()))
}

/// List the administered interest vocabulary
#[utoipa::path(
    get,
    path = "/interests",
    tag = "Profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All selectable interests", body = [InterestResponse]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_interests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InterestResponse>>> {
    let interests = state.profile_service.list_interests().await?;

    Ok(Json(interests.into_iter().map(Into::into).collect()))
}
