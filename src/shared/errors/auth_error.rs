use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호
    /// Invalid email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 잘못된 입력값
    /// Invalid request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Authorization 헤더 없음
    /// Authorization header absent or not a bearer credential
    #[error("Access token is missing")]
    MissingToken,

    /// 토큰 구조가 잘못됨
    /// Token cannot be decoded into the expected claims
    #[error("Access token is malformed")]
    MalformedToken,

    /// 만료된 토큰
    /// Token expired
    #[error("Invalid or expired token")]
    ExpiredToken,

    /// 서명 검증 실패
    /// Signature does not match the configured key
    #[error("Invalid or expired token")]
    InvalidSignature,

    /// 토큰이 가리키는 사용자가 없음
    /// User referenced by the token does not exist
    #[error("User not found: id={id}")]
    UserNotFound { id: u64 },

    /// 비활성화된 사용자
    /// User account is disabled
    #[error("User account is disabled: id={id}")]
    UserDisabled { id: u64 },

    /// 관리자 권한 필요
    /// Admin role required
    #[error("Admin access required")]
    InsufficientRole,

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 비밀번호 검증 실패
    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP 상태 코드
    /// 401: missing token, unknown or disabled user, bad credentials.
    /// 403: malformed, expired or forged token, insufficient role.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::EmailAlreadyExists { .. } | AuthError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::UserNotFound { .. }
            | AuthError::UserDisabled { .. } => StatusCode::UNAUTHORIZED,
            AuthError::MalformedToken
            | AuthError::ExpiredToken
            | AuthError::InvalidSignature
            | AuthError::InsufficientRole => StatusCode::FORBIDDEN,
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트가 분기할 수 있는 에러 코드
    /// Stable machine-readable code sent in the response body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmailAlreadyExists { .. } => "EMAIL_ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InvalidInput(_) => "INVALID_INPUT",
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::MalformedToken => "MALFORMED_TOKEN",
            AuthError::ExpiredToken => "EXPIRED_TOKEN",
            AuthError::InvalidSignature => "INVALID_SIGNATURE",
            AuthError::UserNotFound { .. } => "USER_NOT_FOUND",
            AuthError::UserDisabled { .. } => "USER_DISABLED",
            AuthError::InsufficientRole => "INSUFFICIENT_ROLE",
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }

        (status, Json(json!({ "error": err.to_string(), "code": err.code() })))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Json<serde_json::Value>) = self.into();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_contract() {
        // 401 그룹
        assert_eq!(AuthError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::UserNotFound { id: 1 }.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::UserDisabled { id: 1 }.status(), StatusCode::UNAUTHORIZED);

        // 403 그룹
        assert_eq!(AuthError::MalformedToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::ExpiredToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InvalidSignature.status(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InsufficientRole.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_body_carries_code() {
        let (status, Json(body)) = <(StatusCode, Json<serde_json::Value>)>::from(AuthError::ExpiredToken);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "EXPIRED_TOKEN");
        assert_eq!(body["error"], "Invalid or expired token");
    }
}
