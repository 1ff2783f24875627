// Proposal repositories
pub mod proposal_repository;

pub use proposal_repository::*;
