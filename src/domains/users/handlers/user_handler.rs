use crate::domains::auth::models::UserResponse;
use crate::domains::users::models::{UpdateUserStatusRequest, UsersResponse};
use crate::shared::errors::UserError;
use crate::shared::middleware::auth::AdminUser;
use crate::shared::services::AppState;
use axum::{extract::{Path, State}, Json};

/// 사용자 목록 조회 (관리자 전용)
/// List users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = UsersResponse),
        (status = 401, description = "Missing token, unknown or disabled user"),
        (status = 403, description = "Invalid token or admin role required")
    ),
    security(("BearerAuth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<UsersResponse>, UserError> {
    let users = app_state.user_state.user_service.list_users().await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// 사용자 조회 (관리자 전용)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(app_state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<u64>,
) -> Result<Json<UserResponse>, UserError> {
    let user = app_state.user_state.user_service.get_user(user_id).await?;
    Ok(Json(user.into()))
}

/// 사용자 상태 변경 (관리자 전용)
/// Enable or disable a user (admin only)
#[utoipa::path(
    put,
    path = "/api/users/{id}/status",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UserResponse),
        (status = 400, description = "Invalid status or own account"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_user_status(
    State(app_state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<u64>,
    Json(request): Json<UpdateUserStatusRequest>,
) -> Result<Json<UserResponse>, UserError> {
    let user = app_state
        .user_state
        .user_service
        .set_status(admin.user_id, user_id, request.status)
        .await?;

    Ok(Json(user.into()))
}
