// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 실제 Router를 메모리 저장소로 구동 (DB 불필요)
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = TestApp::new();
//     let user = app.seed_user("a@example.com", ROLE_USER, STATUS_ACTIVE);
//     let (status, body) = app.get("/api/auth/me", Some(&app.token_for(&user))).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

use jobtrack_api::domains::auth::models::{NewUser, User};
use jobtrack_api::domains::auth::services::JwtService;
use jobtrack_api::domains::proposals::models::{Proposal, ProposalDraft};
use jobtrack_api::routes::create_app;
use jobtrack_api::shared::database::{ProposalStore, UserStore, UserStoreError};
use jobtrack_api::shared::services::AppState;

// 테스트용 상수
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const OTHER_SECRET: &str = "some-other-secret-fedcba9876543210fedcba";

/// 메모리 사용자 저장소 (조회 횟수 기록)
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicU64,
    lookups_by_id: AtomicUsize,
}

impl MemoryUserStore {
    pub fn insert(&self, new_user: NewUser) -> User {
        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            email: new_user.email,
            password_hash: new_user.password_hash,
            username: new_user.username,
            role: new_user.role,
            status: new_user.status,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().push(user.clone());
        user
    }

    /// 동기 상태 변경 (관리자 API를 거치지 않는 테스트용)
    pub fn update_user_status_now(&self, id: u64, status: i32) {
        if let Some(user) = self.users.lock().iter_mut().find(|u| u.id == id) {
            user.status = status;
        }
    }

    pub fn lookups_by_id(&self) -> usize {
        self.lookups_by_id.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    // UNIQUE(email) 제약과 동일하게 동작
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        if self.users.lock().iter().any(|u| u.email == new_user.email) {
            return Err(UserStoreError::EmailTaken { email: new_user.email }.into());
        }
        Ok(self.insert(new_user))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.lock().iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: u64) -> Result<Option<User>> {
        self.lookups_by_id.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().clone())
    }

    async fn update_user_status(&self, id: u64, status: i32) -> Result<Option<User>> {
        let mut users = self.users.lock();
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.status = status;
            user.updated_at = Utc::now();
            user.clone()
        }))
    }
}

/// 메모리 지원 내역 저장소
#[derive(Default)]
pub struct MemoryProposalStore {
    proposals: Mutex<Vec<Proposal>>,
    next_id: AtomicU64,
}

#[async_trait]
impl ProposalStore for MemoryProposalStore {
    async fn create_proposal(&self, user_id: u64, draft: ProposalDraft) -> Result<Proposal> {
        let now = Utc::now();
        let proposal = Proposal {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            user_id,
            company: draft.company,
            position: draft.position,
            status: draft.status,
            url: draft.url,
            notes: draft.notes,
            applied_at: draft.applied_at,
            created_at: now,
            updated_at: now,
        };
        self.proposals.lock().push(proposal.clone());
        Ok(proposal)
    }

    async fn list_proposals(&self, user_id: u64) -> Result<Vec<Proposal>> {
        Ok(self
            .proposals
            .lock()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_proposal(&self, user_id: u64, id: u64) -> Result<Option<Proposal>> {
        Ok(self
            .proposals
            .lock()
            .iter()
            .find(|p| p.id == id && p.user_id == user_id)
            .cloned())
    }

    async fn update_proposal(&self, user_id: u64, id: u64, draft: ProposalDraft) -> Result<Option<Proposal>> {
        let mut proposals = self.proposals.lock();
        Ok(proposals
            .iter_mut()
            .find(|p| p.id == id && p.user_id == user_id)
            .map(|p| {
                p.company = draft.company;
                p.position = draft.position;
                p.status = draft.status;
                p.url = draft.url;
                p.notes = draft.notes;
                p.applied_at = draft.applied_at;
                p.updated_at = Utc::now();
                p.clone()
            }))
    }

    async fn delete_proposal(&self, user_id: u64, id: u64) -> Result<bool> {
        let mut proposals = self.proposals.lock();
        let before = proposals.len();
        proposals.retain(|p| !(p.id == id && p.user_id == user_id));
        Ok(proposals.len() != before)
    }
}

/// 테스트 애플리케이션 (Router + 저장소 + JWT 서비스)
pub struct TestApp {
    pub router: Router,
    pub users: Arc<MemoryUserStore>,
    pub proposals: Arc<MemoryProposalStore>,
    pub jwt: JwtService,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserStore::default());
        let proposals = Arc::new(MemoryProposalStore::default());
        let jwt = JwtService::new(TEST_SECRET);

        let state = AppState::with_stores(users.clone(), proposals.clone(), jwt.clone());
        let router = create_app(state, vec![HeaderValue::from_static("http://localhost:3000")]);

        Self { router, users, proposals, jwt }
    }

    /// 비밀번호 없이 사용자 생성 (로그인 불필요한 테스트용)
    pub fn seed_user(&self, email: &str, role: i32, status: i32) -> User {
        self.users.insert(NewUser {
            email: email.to_string(),
            password_hash: String::new(),
            username: None,
            role,
            status,
        })
    }

    pub fn token_for(&self, user: &User) -> String {
        self.jwt.generate_access_token(user).expect("token generation")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }
}
