use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use crate::domains::proposals::models::{Proposal, ProposalDraft, ProposalStatus};

/// 지원 내역 저장소 인터페이스
/// Persistence seam for job proposals. Every query is scoped by owner.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    async fn create_proposal(&self, user_id: u64, draft: ProposalDraft) -> Result<Proposal>;

    async fn list_proposals(&self, user_id: u64) -> Result<Vec<Proposal>>;

    async fn find_proposal(&self, user_id: u64, id: u64) -> Result<Option<Proposal>>;

    async fn update_proposal(&self, user_id: u64, id: u64, draft: ProposalDraft) -> Result<Option<Proposal>>;

    /// 삭제되었으면 true
    async fn delete_proposal(&self, user_id: u64, id: u64) -> Result<bool>;
}

/// PostgreSQL 지원 내역 저장소
pub struct ProposalRepository {
    pool: PgPool,
}

impl ProposalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROPOSAL_COLUMNS: &str =
    "id, user_id, company, position, status, url, notes, applied_at, created_at, updated_at";

fn proposal_from_row(row: &PgRow) -> Result<Proposal> {
    let status: String = row.get("status");
    let status = status
        .parse::<ProposalStatus>()
        .map_err(|_| anyhow!("Unknown proposal status in database: {}", status))?;

    Ok(Proposal {
        id: row.get::<i64, _>("id") as u64,
        user_id: row.get::<i64, _>("user_id") as u64,
        company: row.get("company"),
        position: row.get("position"),
        status,
        url: row.get("url"),
        notes: row.get("notes"),
        applied_at: row.get("applied_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl ProposalStore for ProposalRepository {
    async fn create_proposal(&self, user_id: u64, draft: ProposalDraft) -> Result<Proposal> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO job_proposals (user_id, company, position, status, url, notes, applied_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING {PROPOSAL_COLUMNS}
            "#
        ))
        .bind(user_id as i64)
        .bind(&draft.company)
        .bind(&draft.position)
        .bind(draft.status.as_str())
        .bind(draft.url.as_deref())
        .bind(draft.notes.as_deref())
        .bind(draft.applied_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create proposal")?;

        proposal_from_row(&row)
    }

    async fn list_proposals(&self, user_id: u64) -> Result<Vec<Proposal>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROPOSAL_COLUMNS} FROM job_proposals WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list proposals")?;

        rows.iter().map(proposal_from_row).collect()
    }

    async fn find_proposal(&self, user_id: u64, id: u64) -> Result<Option<Proposal>> {
        let row = sqlx::query(&format!(
            "SELECT {PROPOSAL_COLUMNS} FROM job_proposals WHERE id = $1 AND user_id = $2"
        ))
        .bind(id as i64)
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch proposal")?;

        row.as_ref().map(proposal_from_row).transpose()
    }

    async fn update_proposal(&self, user_id: u64, id: u64, draft: ProposalDraft) -> Result<Option<Proposal>> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE job_proposals
            SET company = $3, position = $4, status = $5, url = $6, notes = $7, applied_at = $8, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {PROPOSAL_COLUMNS}
            "#
        ))
        .bind(id as i64)
        .bind(user_id as i64)
        .bind(&draft.company)
        .bind(&draft.position)
        .bind(draft.status.as_str())
        .bind(draft.url.as_deref())
        .bind(draft.notes.as_deref())
        .bind(draft.applied_at)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update proposal")?;

        row.as_ref().map(proposal_from_row).transpose()
    }

    async fn delete_proposal(&self, user_id: u64, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM job_proposals WHERE id = $1 AND user_id = $2")
            .bind(id as i64)
            .bind(user_id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to delete proposal")?;

        Ok(result.rows_affected() > 0)
    }
}
