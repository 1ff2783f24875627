use std::sync::Arc;
use crate::shared::database::{Database, ProposalRepository, ProposalStore, UserRepository, UserStore};
use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::users::services::UserState;
use crate::domains::proposals::services::ProposalState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub user_state: UserState,
    pub proposal_state: ProposalState,
}

impl AppState {
    /// PostgreSQL 저장소로 AppState 생성
    /// Create AppState backed by PostgreSQL repositories
    pub fn new(db: &Database, jwt_service: JwtService) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db.pool().clone()));
        let proposals: Arc<dyn ProposalStore> = Arc::new(ProposalRepository::new(db.pool().clone()));

        Self::with_stores(users, proposals, jwt_service)
    }

    /// 임의의 저장소 구현으로 AppState 생성
    /// Create AppState from arbitrary store implementations
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        proposals: Arc<dyn ProposalStore>,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            auth_state: AuthState::new(users.clone(), jwt_service),
            user_state: UserState::new(users),
            proposal_state: ProposalState::new(proposals),
        }
    }
}
