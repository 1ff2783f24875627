use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 관리자 역할
/// Admin role value
pub const ROLE_ADMIN: i32 = 0;

/// 일반 사용자 역할
/// Regular user role value
pub const ROLE_USER: i32 = 1;

/// 활성 상태 (이 값 외에는 모두 비활성)
/// Active status; any other value means disabled
pub const STATUS_ACTIVE: i32 = 1;

pub const STATUS_DISABLED: i32 = 0;

/// 사용자 모델 (DB 레코드)
/// User model (database record)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
    pub role: i32,
    pub status: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// 사용자 생성 데이터
/// Data required to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
    pub role: i32,
    pub status: i32,
}

// 사용자 응답 모델 (비밀번호 제외)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = UserResponse)]
pub struct UserResponse {
    /// User ID
    #[schema(example = 1)]
    pub id: u64,

    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Username
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// 0 = admin, 1 = user
    #[schema(example = 1)]
    pub role: i32,

    /// 1 = active, anything else = disabled
    #[schema(example = 1)]
    pub status: i32,

    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}
