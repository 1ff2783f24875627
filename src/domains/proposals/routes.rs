// Proposal domain routes
// 지원 내역 라우터 (모두 인증 필요)
use axum::{routing::get, Router};
use crate::domains::proposals::handlers::proposal_handler;
use crate::shared::services::AppState;

/// Create proposal router
pub fn create_proposal_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(proposal_handler::list_proposals).post(proposal_handler::create_proposal),
        )
        .route(
            "/:id",
            get(proposal_handler::get_proposal)
                .put(proposal_handler::update_proposal)
                .delete(proposal_handler::delete_proposal),
        )
}
