use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::auth::models::user::User;

/// Access Token 수명 (시간)
pub const ACCESS_TOKEN_TTL_HOURS: i64 = 24;

/// Refresh Token 수명 (일)
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Refresh Token의 `type` 클레임 값
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Access Token Claims (토큰에 포함될 데이터)
/// Access token claims: `{userId, email, role, iat, exp}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// 사용자 ID
    /// User ID
    pub user_id: u64,

    /// 이메일
    /// Email
    pub email: String,

    /// 역할 (0 = admin)
    /// Role (0 = admin)
    pub role: i32,

    /// 발급 시간 (Unix timestamp, 초)
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp, 초)
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new claims; expiration is derived from `issued_at`
    pub fn new(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(ACCESS_TOKEN_TTL_HOURS)).timestamp(),
        }
    }
}

/// Refresh Token Claims: `{userId, type: "refresh", iat, exp}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClaims {
    pub user_id: u64,

    #[serde(rename = "type")]
    pub token_type: String,

    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(REFRESH_TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}
