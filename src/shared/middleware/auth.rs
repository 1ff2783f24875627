use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use crate::domains::auth::models::user::User;
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;

/// 인증된 사용자 정보 (JWT 검증 + DB 조회 결과)
/// Authenticated user: the token was verified and the user record re-read from storage
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub user: User,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn list_proposals(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
///
/// Admission requires a valid signature, an unexpired token, and a stored
/// user whose status is active. The user lookup is not cached.
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 Bearer 토큰 추출
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::debug!(code = AuthError::MissingToken.code(), "rejecting request");
            AuthError::MissingToken
        })?;

        // 2. 서명 + 만료 검증
        let claims = state
            .auth_state
            .jwt_service
            .verify_access_token(token)
            .inspect_err(|e| tracing::debug!(code = e.code(), "access token rejected"))?;

        // 3. 사용자 조회 (토큰만으로는 권한 판단하지 않음)
        let user = state
            .auth_state
            .user_store
            .find_user_by_id(claims.user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or_else(|| {
                tracing::warn!(user_id = claims.user_id, "token references unknown user");
                AuthError::UserNotFound { id: claims.user_id }
            })?;

        if !user.is_active() {
            tracing::warn!(user_id = user.id, status = user.status, "disabled user rejected");
            return Err(AuthError::UserDisabled { id: user.id });
        }

        // 4. AuthenticatedUser 반환
        Ok(AuthenticatedUser {
            user_id: user.id,
            user,
        })
    }
}

/// 관리자 전용 Extractor (AuthenticatedUser 이후 role == 0 확인)
/// Admin gate: runs full authentication first, then requires the admin role
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authenticated_user = AuthenticatedUser::from_request_parts(parts, state).await?;

        if !authenticated_user.user.is_admin() {
            tracing::warn!(user_id = authenticated_user.user_id, "admin route denied");
            return Err(AuthError::InsufficientRole);
        }

        Ok(AdminUser(authenticated_user))
    }
}

/// "Bearer <token>" 형식 파싱. 형식이 다르면 토큰 없음으로 처리
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
