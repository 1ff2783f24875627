use std::sync::Arc;

use crate::domains::auth::models::{User, STATUS_ACTIVE, STATUS_DISABLED};
use crate::shared::database::UserStore;
use crate::shared::errors::UserError;

/// 사용자 관리 서비스 (관리자 전용)
/// UserAdminService: admin-only user management
#[derive(Clone)]
pub struct UserAdminService {
    users: Arc<dyn UserStore>,
}

impl UserAdminService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.users
            .list_users()
            .await
            .map_err(|e| UserError::DatabaseError(format!("Failed to list users: {}", e)))
    }

    pub async fn get_user(&self, id: u64) -> Result<User, UserError> {
        self.users
            .find_user_by_id(id)
            .await
            .map_err(|e| UserError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(UserError::NotFound { id })
    }

    /// 사용자 활성/비활성 전환
    /// Disabling takes effect on the user's next request; issued tokens are not revoked.
    pub async fn set_status(&self, actor_id: u64, id: u64, status: i32) -> Result<User, UserError> {
        if status != STATUS_ACTIVE && status != STATUS_DISABLED {
            return Err(UserError::InvalidStatus { status });
        }
        if actor_id == id {
            return Err(UserError::CannotChangeOwnStatus);
        }

        let user = self
            .users
            .update_user_status(id, status)
            .await
            .map_err(|e| UserError::DatabaseError(format!("Failed to update user status: {}", e)))?
            .ok_or(UserError::NotFound { id })?;

        tracing::info!(actor_id, user_id = id, status, "user status changed");
        Ok(user)
    }
}
