// =====================================================
// 지원 내역 / 사용자 관리 API 통합 테스트
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use jobtrack_api::client::RejectionReason;
use jobtrack_api::domains::auth::models::{ROLE_ADMIN, ROLE_USER, STATUS_ACTIVE, STATUS_DISABLED};
use serde_json::json;

#[tokio::test]
async fn test_proposal_crud() {
    let app = TestApp::new();
    let user = app.seed_user("jane@example.com", ROLE_USER, STATUS_ACTIVE);
    let token = app.token_for(&user);

    let (status, created) = app
        .post(
            "/api/proposals",
            Some(&token),
            json!({ "company": "  Acme Corp ", "position": "Backend Engineer", "notes": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["company"], "Acme Corp");
    assert_eq!(created["status"], "applied");
    assert!(created["notes"].is_null());
    assert_eq!(created["userId"], user.id);

    let id = created["id"].as_u64().unwrap();
    let uri = format!("/api/proposals/{id}");

    let (status, fetched) = app.get(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["position"], "Backend Engineer");

    let (status, updated) = app
        .put(
            &uri,
            Some(&token),
            json!({ "company": "Acme Corp", "position": "Backend Engineer", "status": "interview" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "interview");

    let (status, list) = app.get("/api/proposals", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["proposals"].as_array().unwrap().len(), 1);

    let (status, _) = app.delete(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&uri, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROPOSAL_NOT_FOUND");
}

#[tokio::test]
async fn test_proposals_are_scoped_to_owner() {
    let app = TestApp::new();
    let owner = app.seed_user("owner@example.com", ROLE_USER, STATUS_ACTIVE);
    let other = app.seed_user("other@example.com", ROLE_USER, STATUS_ACTIVE);
    let owner_token = app.token_for(&owner);
    let other_token = app.token_for(&other);

    let (_, created) = app
        .post(
            "/api/proposals",
            Some(&owner_token),
            json!({ "company": "Acme Corp", "position": "SRE" }),
        )
        .await;
    let uri = format!("/api/proposals/{}", created["id"].as_u64().unwrap());

    let (status, _) = app.get(&uri, Some(&other_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri, Some(&other_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.get("/api/proposals", Some(&other_token)).await;
    assert!(list["proposals"].as_array().unwrap().is_empty());

    // 소유자에게는 그대로 남아 있음
    let (status, _) = app.get(&uri, Some(&owner_token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_blank_company_rejected() {
    let app = TestApp::new();
    let user = app.seed_user("jane@example.com", ROLE_USER, STATUS_ACTIVE);

    let (status, body) = app
        .post(
            "/api/proposals",
            Some(&app.token_for(&user)),
            json!({ "company": "   ", "position": "SRE" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_proposals_require_authentication() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/proposals", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_admin_disable_takes_effect_on_next_request() {
    let app = TestApp::new();
    let admin = app.seed_user("admin@example.com", ROLE_ADMIN, STATUS_ACTIVE);
    let user = app.seed_user("jane@example.com", ROLE_USER, STATUS_ACTIVE);
    let admin_token = app.token_for(&admin);
    let user_token = app.token_for(&user);

    let (status, _) = app.get("/api/proposals", Some(&user_token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .put(
            &format!("/api/users/{}/status", user.id),
            Some(&admin_token),
            json!({ "status": STATUS_DISABLED }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], STATUS_DISABLED);

    // 같은 토큰이지만 다음 요청부터 거절
    let (status, body) = app.get("/api/proposals", Some(&user_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "USER_DISABLED");

    let (status, _) = app
        .put(
            &format!("/api/users/{}/status", user.id),
            Some(&admin_token),
            json!({ "status": STATUS_ACTIVE }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/api/proposals", Some(&user_token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_status_change_rules() {
    let app = TestApp::new();
    let admin = app.seed_user("admin@example.com", ROLE_ADMIN, STATUS_ACTIVE);
    let user = app.seed_user("jane@example.com", ROLE_USER, STATUS_ACTIVE);
    let token = app.token_for(&admin);

    let (status, body) = app
        .put(&format!("/api/users/{}/status", admin.id), Some(&token), json!({ "status": STATUS_DISABLED }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CANNOT_CHANGE_OWN_STATUS");

    let (status, body) = app
        .put(&format!("/api/users/{}/status", user.id), Some(&token), json!({ "status": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_STATUS");

    let (status, body) = app
        .put("/api/users/999/status", Some(&token), json!({ "status": STATUS_DISABLED }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TARGET_USER_NOT_FOUND");
}

#[tokio::test]
async fn test_admin_lookup_miss_is_not_a_session_rejection() {
    let app = TestApp::new();
    let admin = app.seed_user("admin@example.com", ROLE_ADMIN, STATUS_ACTIVE);

    let (status, body) = app.get("/api/users/999", Some(&app.token_for(&admin))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let code = body["code"].as_str().unwrap();
    assert_eq!(RejectionReason::from_code(code), None);

    // 토큰의 사용자가 사라진 경우는 여전히 세션 거절
    let ghost = app.seed_user("ghost@example.com", ROLE_USER, STATUS_ACTIVE);
    let ghost_token = app.token_for(&ghost);
    let other = TestApp::new();
    let (status, body) = other.get("/api/auth/me", Some(&ghost_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        RejectionReason::from_code(body["code"].as_str().unwrap()),
        Some(RejectionReason::UserNotFound)
    );
}

#[tokio::test]
async fn test_admin_lists_users_without_password_hashes() {
    let app = TestApp::new();
    let admin = app.seed_user("admin@example.com", ROLE_ADMIN, STATUS_ACTIVE);
    app.seed_user("jane@example.com", ROLE_USER, STATUS_ACTIVE);

    let (status, body) = app.get("/api/users", Some(&app.token_for(&admin))).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let (status, _) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
}
