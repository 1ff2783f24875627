use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::domains::auth::models::user::UserResponse;

// 사용자 상태 변경 요청
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateUserStatusRequest)]
pub struct UpdateUserStatusRequest {
    /// 1 = active, 0 = disabled
    #[schema(example = 0)]
    pub status: i32,
}

// 사용자 목록 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UsersResponse)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}
