use crate::domains::auth::models::{
    SignupRequest, SignupResponse, SigninRequest, SigninResponse,
    RefreshTokenRequest, RefreshTokenResponse, UserResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = SignupResponse),
        (status = 400, description = "Bad request (invalid input or email already exists)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AuthError> {
    let user = app_state
        .auth_state
        .auth_service
        .signup(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user: user.into(),
            message: "User created successfully".to_string(),
        }),
    ))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Login successful", body = SigninResponse),
        (status = 401, description = "Invalid email or password, or account disabled"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signin(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AuthError> {
    let (user, tokens) = app_state
        .auth_state
        .auth_service
        .signin(request)
        .await?;

    Ok(Json(SigninResponse {
        user: user.into(),
        tokens,
        message: "Login successful".to_string(),
    }))
}

/// 토큰 갱신 핸들러
/// Refresh token handler
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed successfully", body = RefreshTokenResponse),
        (status = 401, description = "User not found or disabled"),
        (status = 403, description = "Invalid, expired or malformed refresh token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, AuthError> {
    let tokens = app_state
        .auth_state
        .auth_service
        .refresh_tokens(&request.refresh_token)
        .await?;

    Ok(Json(RefreshTokenResponse {
        tokens,
        message: "Token refreshed successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Missing token, unknown or disabled user"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_me(authenticated_user: AuthenticatedUser) -> Json<UserResponse> {
    // 미들웨어에서 이미 조회한 사용자 사용
    Json(authenticated_user.user.into())
}
