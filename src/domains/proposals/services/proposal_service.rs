use std::sync::Arc;

use crate::domains::proposals::models::{Proposal, ProposalDraft, ProposalRequest};
use crate::shared::database::ProposalStore;
use crate::shared::errors::ProposalError;

const MAX_FIELD_LEN: usize = 255;

/// 지원 내역 서비스
/// ProposalService: per-user CRUD over job proposals
#[derive(Clone)]
pub struct ProposalService {
    proposals: Arc<dyn ProposalStore>,
}

impl ProposalService {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }

    pub async fn list(&self, user_id: u64) -> Result<Vec<Proposal>, ProposalError> {
        self.proposals
            .list_proposals(user_id)
            .await
            .map_err(|e| ProposalError::DatabaseError(format!("Failed to list proposals: {}", e)))
    }

    pub async fn get(&self, user_id: u64, id: u64) -> Result<Proposal, ProposalError> {
        self.proposals
            .find_proposal(user_id, id)
            .await
            .map_err(|e| ProposalError::DatabaseError(format!("Failed to fetch proposal: {}", e)))?
            .ok_or(ProposalError::NotFound { id })
    }

    pub async fn create(&self, user_id: u64, request: ProposalRequest) -> Result<Proposal, ProposalError> {
        let draft = Self::validate(request)?;

        self.proposals
            .create_proposal(user_id, draft)
            .await
            .map_err(|e| ProposalError::DatabaseError(format!("Failed to create proposal: {}", e)))
    }

    pub async fn update(&self, user_id: u64, id: u64, request: ProposalRequest) -> Result<Proposal, ProposalError> {
        let draft = Self::validate(request)?;

        self.proposals
            .update_proposal(user_id, id, draft)
            .await
            .map_err(|e| ProposalError::DatabaseError(format!("Failed to update proposal: {}", e)))?
            .ok_or(ProposalError::NotFound { id })
    }

    pub async fn delete(&self, user_id: u64, id: u64) -> Result<(), ProposalError> {
        let deleted = self
            .proposals
            .delete_proposal(user_id, id)
            .await
            .map_err(|e| ProposalError::DatabaseError(format!("Failed to delete proposal: {}", e)))?;

        if !deleted {
            return Err(ProposalError::NotFound { id });
        }
        Ok(())
    }

    // 필수 필드 검증 및 공백 정리
    fn validate(request: ProposalRequest) -> Result<ProposalDraft, ProposalError> {
        let company = required_field("company", &request.company)?;
        let position = required_field("position", &request.position)?;
        let blank_to_none = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Ok(ProposalDraft {
            company,
            position,
            status: request.status.unwrap_or_default(),
            url: blank_to_none(request.url),
            notes: blank_to_none(request.notes),
            applied_at: request.applied_at,
        })
    }
}

fn required_field(name: &str, value: &str) -> Result<String, ProposalError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProposalError::InvalidInput(format!("{name} is required")));
    }
    if trimmed.len() > MAX_FIELD_LEN {
        return Err(ProposalError::InvalidInput(format!(
            "{name} must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}
