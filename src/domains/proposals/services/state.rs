// Proposal domain state
// 지원 내역 도메인 상태
use std::sync::Arc;

use crate::domains::proposals::services::ProposalService;
use crate::shared::database::ProposalStore;

/// Proposal domain state
#[derive(Clone)]
pub struct ProposalState {
    pub proposal_service: ProposalService,
}

impl ProposalState {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self {
            proposal_service: ProposalService::new(proposals),
        }
    }
}
