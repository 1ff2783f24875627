// User management models
pub mod user_admin;

pub use user_admin::*;
