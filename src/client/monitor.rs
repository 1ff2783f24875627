use chrono::{DateTime, Utc};

use crate::client::state::{SessionEvent, SessionPhase};
use crate::client::storage::{Session, SessionStore, Storage};
use crate::client::token::decode_unverified;
use crate::client::{Navigator, Notifier, LOGIN_PATH};

/// 만료 안내 문구
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please login again.";

/// 서버가 반환한 인증 실패 사유 (응답 body의 `code`)
/// Server-side rejection reasons, as carried in the error body's `code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    MissingToken,
    MalformedToken,
    ExpiredToken,
    InvalidSignature,
    UserNotFound,
    UserDisabled,
    InsufficientRole,
}

impl RejectionReason {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MISSING_TOKEN" => Some(Self::MissingToken),
            "MALFORMED_TOKEN" => Some(Self::MalformedToken),
            "EXPIRED_TOKEN" => Some(Self::ExpiredToken),
            "INVALID_SIGNATURE" => Some(Self::InvalidSignature),
            "USER_NOT_FOUND" => Some(Self::UserNotFound),
            "USER_DISABLED" => Some(Self::UserDisabled),
            "INSUFFICIENT_ROLE" => Some(Self::InsufficientRole),
            _ => None,
        }
    }

    fn event(self) -> SessionEvent {
        match self {
            Self::ExpiredToken => SessionEvent::TokenExpired,
            Self::UserDisabled => SessionEvent::AccountDisabled,
            _ => SessionEvent::SignOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    NoToken,
    Expired,
    Malformed,
    Rejected(RejectionReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorOutcome {
    /// 토큰 유효
    Active,
    /// 세션 정리 후 로그인 화면으로 이동
    Redirected(RedirectReason),
    /// 세션은 정리했지만 이번 mount에서 이미 이동했으므로 생략
    AlreadyRedirected,
}

/// 세션 만료 감시자
/// Runs on every render of a guarded view. Create one per mount: the redirect
/// latch is only reset by constructing a new monitor.
#[derive(Debug, Default)]
pub struct SessionMonitor {
    redirected: bool,
    phase: SessionPhase,
    ended_as: Option<SessionPhase>,
}

impl SessionMonitor {
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn has_redirected(&self) -> bool {
        self.redirected
    }

    /// 마지막으로 거친 종료 상태 (Expired / Disabled / SignedOut)
    pub fn ended_as(&self) -> Option<SessionPhase> {
        self.ended_as
    }

    /// 저장된 access token 검사
    /// Inspect the persisted access token at `now`.
    pub fn check<S, N, M>(
        &mut self,
        store: &SessionStore<S>,
        now: DateTime<Utc>,
        navigator: &mut N,
        notifier: &mut M,
    ) -> MonitorOutcome
    where
        S: Storage,
        N: Navigator,
        M: Notifier,
    {
        let Some(token) = store.access_token() else {
            return self.end_session(store, SessionEvent::SignOut, RedirectReason::NoToken, false, navigator, notifier);
        };

        match decode_unverified(&token) {
            Ok(payload) if !payload.is_expired_at(now) => {
                if let Ok(next) = self.phase.apply(SessionEvent::SignedIn) {
                    self.phase = next;
                }
                MonitorOutcome::Active
            }
            Ok(_) => self.end_session(store, SessionEvent::TokenExpired, RedirectReason::Expired, true, navigator, notifier),
            Err(e) => {
                tracing::debug!(error = %e, "stored access token unreadable");
                // 만료와 동일하게 처리
                self.end_session(store, SessionEvent::TokenExpired, RedirectReason::Malformed, true, navigator, notifier)
            }
        }
    }

    /// 서버 거절 응답 처리. 모든 사유가 같은 복구 경로로 수렴 (안내는 만료일 때만)
    /// Collapse a server-side rejection into the common recovery path.
    pub fn handle_rejection<S, N, M>(
        &mut self,
        reason: RejectionReason,
        store: &SessionStore<S>,
        navigator: &mut N,
        notifier: &mut M,
    ) -> MonitorOutcome
    where
        S: Storage,
        N: Navigator,
        M: Notifier,
    {
        let notice = reason == RejectionReason::ExpiredToken;
        self.end_session(store, reason.event(), RedirectReason::Rejected(reason), notice, navigator, notifier)
    }

    /// 로그인 성공 시 세션 저장
    pub fn sign_in<S: Storage>(&mut self, store: &SessionStore<S>, session: &Session) {
        store.save(session);
        if let Ok(next) = self.phase.apply(SessionEvent::SignedIn) {
            self.phase = next;
        }
    }

    /// 사용자가 직접 로그아웃 (latch와 무관하게 이동)
    pub fn sign_out<S: Storage, N: Navigator>(&mut self, store: &SessionStore<S>, navigator: &mut N) {
        store.clear();
        self.finish(SessionEvent::SignOut);
        navigator.replace(LOGIN_PATH);
    }

    fn end_session<S, N, M>(
        &mut self,
        store: &SessionStore<S>,
        event: SessionEvent,
        reason: RedirectReason,
        notice: bool,
        navigator: &mut N,
        notifier: &mut M,
    ) -> MonitorOutcome
    where
        S: Storage,
        N: Navigator,
        M: Notifier,
    {
        store.clear();
        self.finish(event);

        if self.redirected {
            return MonitorOutcome::AlreadyRedirected;
        }
        self.redirected = true;

        if notice {
            notifier.notify(SESSION_EXPIRED_NOTICE);
        }
        navigator.replace(LOGIN_PATH);
        MonitorOutcome::Redirected(reason)
    }

    fn finish(&mut self, event: SessionEvent) {
        if let Ok(ended) = self.phase.apply(event) {
            self.ended_as = Some(ended);
        }
        self.phase = SessionPhase::Unauthenticated;
    }
}
