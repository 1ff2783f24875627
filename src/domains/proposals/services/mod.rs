// Proposal domain services
pub mod proposal_service;
pub mod state;

pub use proposal_service::*;
pub use state::*;
