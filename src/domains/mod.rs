// Domain modules
pub mod auth;
pub mod users;
pub mod proposals;
