use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// 지원 내역 관련 에러
/// Job proposal errors
#[derive(Error, Debug)]
pub enum ProposalError {
    /// 지원 내역을 찾을 수 없음 (다른 사용자 소유 포함)
    /// Proposal not found (or owned by another user)
    #[error("Proposal not found: id={id}")]
    NotFound { id: u64 },

    /// 잘못된 입력값
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ProposalError를 HTTP 응답으로 변환
impl From<ProposalError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ProposalError) -> Self {
        let (status, code) = match &err {
            ProposalError::NotFound { .. } => (StatusCode::NOT_FOUND, "PROPOSAL_NOT_FOUND"),
            ProposalError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ProposalError::DatabaseError(_) => {
                tracing::error!(error = %err, "proposal request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        (status, Json(json!({ "error": err.to_string(), "code": code })))
    }
}

impl IntoResponse for ProposalError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Json<serde_json::Value>) = self.into();
        (status, body).into_response()
    }
}
