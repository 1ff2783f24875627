use utoipa::OpenApi;

use crate::domains::auth::models::*;
use crate::domains::users::models::*;
use crate::domains::proposals::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::signup,
        crate::domains::auth::handlers::auth_handler::signin,
        crate::domains::auth::handlers::auth_handler::refresh,
        crate::domains::auth::handlers::auth_handler::get_me,
        crate::domains::users::handlers::user_handler::list_users,
        crate::domains::users::handlers::user_handler::get_user,
        crate::domains::users::handlers::user_handler::update_user_status,
        crate::domains::proposals::handlers::proposal_handler::list_proposals,
        crate::domains::proposals::handlers::proposal_handler::create_proposal,
        crate::domains::proposals::handlers::proposal_handler::get_proposal,
        crate::domains::proposals::handlers::proposal_handler::update_proposal,
        crate::domains::proposals::handlers::proposal_handler::delete_proposal
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        SigninRequest,
        SigninResponse,
        TokenPair,
        RefreshTokenRequest,
        RefreshTokenResponse,
        UserResponse,
        UpdateUserStatusRequest,
        UsersResponse,
        Proposal,
        ProposalStatus,
        ProposalRequest,
        ProposalsResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints"),
        (name = "Users", description = "User management (admin only)"),
        (name = "Proposals", description = "Job proposal tracking")
    ),
    info(
        title = "Job Tracker API",
        description = "API server for the job-application tracking dashboard",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
