// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;

use crate::shared::database::UserStore;
use crate::domains::auth::services::{AuthService, JwtService};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
    /// 미들웨어가 요청마다 사용자 상태를 조회할 때 사용
    pub user_store: Arc<dyn UserStore>,
}

impl AuthState {
    pub fn new(user_store: Arc<dyn UserStore>, jwt_service: JwtService) -> Self {
        Self {
            auth_service: AuthService::new(user_store.clone(), jwt_service.clone()),
            jwt_service,
            user_store,
        }
    }
}
