use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domains::auth::models::{TokenPair, UserResponse};

/// 세션이 저장되는 키
/// Persisted key holding the whole session; removed wholesale on logout or expiry.
pub const SESSION_STORAGE_KEY: &str = "userStore";

/// Key/value storage with localStorage semantics.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// 메모리 저장소
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// 클라이언트 세션 (토큰 쌍 + 캐시된 사용자 정보)
/// Client-held session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserResponse>,
}

impl Session {
    pub fn new(tokens: TokenPair, user: UserResponse) -> Self {
        Self {
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
            user: Some(user),
        }
    }

    /// 비어 있는 토큰은 없는 것으로 취급
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// 세션 영속화
/// Reads and writes the session under [`SESSION_STORAGE_KEY`].
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 저장된 세션 로드. 파싱 불가능한 값은 세션 없음으로 처리
    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::debug!(error = %e, "discarding unreadable persisted session");
                None
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.load()?.access_token().map(str::to_owned)
    }

    pub fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.set(SESSION_STORAGE_KEY, raw),
            Err(e) => tracing::error!(error = %e, "failed to serialise session"),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_STORAGE_KEY);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
