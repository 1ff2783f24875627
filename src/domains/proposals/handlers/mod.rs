// Proposal domain handlers
pub mod proposal_handler;
