use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 지원 진행 상태
/// Application pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Applied => "applied",
            ProposalStatus::Interview => "interview",
            ProposalStatus::Offer => "offer",
            ProposalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(ProposalStatus::Applied),
            "interview" => Ok(ProposalStatus::Interview),
            "offer" => Ok(ProposalStatus::Offer),
            "rejected" => Ok(ProposalStatus::Rejected),
            other => Err(format!("unknown proposal status: {other}")),
        }
    }
}

/// 지원 내역 (DB 레코드 겸 응답 모델)
/// Job proposal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Proposal)]
pub struct Proposal {
    pub id: u64,
    pub user_id: u64,

    #[schema(example = "Acme Corp")]
    pub company: String,

    #[schema(example = "Backend Engineer")]
    pub position: String,

    pub status: ProposalStatus,

    #[schema(example = "https://jobs.example.com/123")]
    pub url: Option<String>,

    pub notes: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 지원 내역 생성/수정 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ProposalRequest)]
pub struct ProposalRequest {
    /// Company name
    /// 회사명
    #[schema(example = "Acme Corp")]
    pub company: String,

    /// Position title
    /// 직무
    #[schema(example = "Backend Engineer")]
    pub position: String,

    /// Defaults to `applied`
    pub status: Option<ProposalStatus>,

    pub url: Option<String>,
    pub notes: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
}

/// 검증된 입력 (저장소로 전달)
/// Validated proposal fields handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    pub company: String,
    pub position: String,
    pub status: ProposalStatus,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
}

// 지원 내역 목록 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ProposalsResponse)]
pub struct ProposalsResponse {
    pub proposals: Vec<Proposal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_matches_serde() {
        for status in [
            ProposalStatus::Applied,
            ProposalStatus::Interview,
            ProposalStatus::Offer,
            ProposalStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<ProposalStatus>().unwrap(), status);
        }
        assert!("hired".parse::<ProposalStatus>().is_err());
    }
}
