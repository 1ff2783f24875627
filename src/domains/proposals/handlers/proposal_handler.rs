use crate::domains::proposals::models::{Proposal, ProposalRequest, ProposalsResponse};
use crate::shared::errors::ProposalError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{extract::{Path, State}, http::StatusCode, Json};

/// 내 지원 내역 목록
/// List the caller's job proposals
/// Note: user_id는 JWT 토큰에서 자동 추출됨
#[utoipa::path(
    get,
    path = "/api/proposals",
    responses(
        (status = 200, description = "Proposals retrieved successfully", body = ProposalsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("BearerAuth" = [])),
    tag = "Proposals"
)]
pub async fn list_proposals(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<ProposalsResponse>, ProposalError> {
    let proposals = app_state
        .proposal_state
        .proposal_service
        .list(authenticated_user.user_id)
        .await?;

    Ok(Json(ProposalsResponse { proposals }))
}

/// 지원 내역 생성
#[utoipa::path(
    post,
    path = "/api/proposals",
    request_body = ProposalRequest,
    responses(
        (status = 201, description = "Proposal created", body = Proposal),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Proposals"
)]
pub async fn create_proposal(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<ProposalRequest>,
) -> Result<(StatusCode, Json<Proposal>), ProposalError> {
    let proposal = app_state
        .proposal_state
        .proposal_service
        .create(authenticated_user.user_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(proposal)))
}

/// 지원 내역 조회 (본인 소유만)
#[utoipa::path(
    get,
    path = "/api/proposals/{id}",
    params(("id" = u64, Path, description = "Proposal ID")),
    responses(
        (status = 200, description = "Proposal retrieved", body = Proposal),
        (status = 404, description = "Proposal not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Proposals"
)]
pub async fn get_proposal(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(proposal_id): Path<u64>,
) -> Result<Json<Proposal>, ProposalError> {
    let proposal = app_state
        .proposal_state
        .proposal_service
        .get(authenticated_user.user_id, proposal_id)
        .await?;

    Ok(Json(proposal))
}

/// 지원 내역 수정 (본인 소유만)
#[utoipa::path(
    put,
    path = "/api/proposals/{id}",
    params(("id" = u64, Path, description = "Proposal ID")),
    request_body = ProposalRequest,
    responses(
        (status = 200, description = "Proposal updated", body = Proposal),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Proposal not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Proposals"
)]
pub async fn update_proposal(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(proposal_id): Path<u64>,
    Json(request): Json<ProposalRequest>,
) -> Result<Json<Proposal>, ProposalError> {
    let proposal = app_state
        .proposal_state
        .proposal_service
        .update(authenticated_user.user_id, proposal_id, request)
        .await?;

    Ok(Json(proposal))
}

/// 지원 내역 삭제 (본인 소유만)
#[utoipa::path(
    delete,
    path = "/api/proposals/{id}",
    params(("id" = u64, Path, description = "Proposal ID")),
    responses(
        (status = 204, description = "Proposal deleted"),
        (status = 404, description = "Proposal not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Proposals"
)]
pub async fn delete_proposal(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(proposal_id): Path<u64>,
) -> Result<StatusCode, ProposalError> {
    app_state
        .proposal_state
        .proposal_service
        .delete(authenticated_user.user_id, proposal_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
