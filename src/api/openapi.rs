//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, click_handler, profile_handler};
use crate::domain::{ClickResponse, InterestResponse, ProfileView, UpdateProfile, UserResponse, UserRole};
use crate::services::SessionToken;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Newsreader API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newsreader API",
        version = "0.1.0",
        description = "News-reading app backend: identity, interests, and click history",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::manager_login,
        auth_handler::logout,
        // Profile endpoints
        profile_handler::get_profile,
        profile_handler::edit_profile,
        profile_handler::set_interests,
        profile_handler::list_interests,
        // Click endpoints
        click_handler::record_click,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            ProfileView,
            UpdateProfile,
            InterestResponse,
            ClickResponse,
            // Request/response types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            profile_handler::SetInterestsRequest,
            click_handler::RecordClickRequest,
            SessionToken,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and logout"),
        (name = "Profile", description = "Profile and interest management"),
        (name = "Clicks", description = "Article click history")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
