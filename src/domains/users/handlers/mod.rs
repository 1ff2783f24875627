// User management handlers
pub mod user_handler;
