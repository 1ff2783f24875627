// User management domain state
use std::sync::Arc;

use crate::domains::users::services::UserAdminService;
use crate::shared::database::UserStore;

#[derive(Clone)]
pub struct UserState {
    pub user_service: UserAdminService,
}

impl UserState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            user_service: UserAdminService::new(users),
        }
    }
}
