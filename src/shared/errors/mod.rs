// Shared errors
pub mod auth_error;
pub mod proposal_error;
pub mod user_error;

pub use auth_error::*;
pub use proposal_error::*;
pub use user_error::*;
