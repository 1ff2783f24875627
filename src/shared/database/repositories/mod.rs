// All repositories module
pub mod auth;
pub mod proposals;

// Re-export all repositories for convenience
pub use auth::*;
pub use proposals::*;
