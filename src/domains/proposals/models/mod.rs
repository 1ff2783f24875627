// Proposal domain models
pub mod proposal;

pub use proposal::*;
