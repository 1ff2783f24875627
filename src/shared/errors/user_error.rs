use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// 사용자 관리(관리자) 에러
/// Errors raised by admin user-management operations
#[derive(Error, Debug)]
pub enum UserError {
    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    NotFound { id: u64 },

    /// 자기 자신의 계정은 비활성화할 수 없음
    /// Admins cannot disable their own account
    #[error("Cannot change the status of your own account")]
    CannotChangeOwnStatus,

    /// 허용되지 않는 상태 값
    /// Status value outside the accepted set
    #[error("Invalid user status: {status}")]
    InvalidStatus { status: i32 },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// UserError를 HTTP 응답으로 변환
impl From<UserError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: UserError) -> Self {
        let (status, code) = match &err {
            UserError::NotFound { .. } => (StatusCode::NOT_FOUND, "TARGET_USER_NOT_FOUND"),
            UserError::CannotChangeOwnStatus => (StatusCode::BAD_REQUEST, "CANNOT_CHANGE_OWN_STATUS"),
            UserError::InvalidStatus { .. } => (StatusCode::BAD_REQUEST, "INVALID_STATUS"),
            UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "user management request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        (status, Json(json!({ "error": err.to_string(), "code": code })))
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Json<serde_json::Value>) = self.into();
        (status, body).into_response()
    }
}
