// User management routes (admin only)
use axum::{routing::{get, put}, Router};
use crate::domains::users::handlers::user_handler;
use crate::shared::services::AppState;

/// Create user management router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user_handler::list_users))
        .route("/:id", get(user_handler::get_user))
        .route("/:id/status", put(user_handler::update_user_status))
}
