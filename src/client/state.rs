use thiserror::Error;

/// 세션 상태
/// Conceptual session lifecycle shared by the monitor and the guard:
/// `Unauthenticated -> Authenticated -> (Expired | Disabled | SignedOut) -> Unauthenticated`.
/// There is no refresh edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    Authenticated,
    Expired,
    Disabled,
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    TokenExpired,
    AccountDisabled,
    SignOut,
    /// 종료 상태에서 Unauthenticated로 복귀
    Reset,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid session transition from {from:?} on {event:?}")]
pub struct InvalidTransition {
    pub from: SessionPhase,
    pub event: SessionEvent,
}

impl SessionPhase {
    pub fn apply(self, event: SessionEvent) -> Result<SessionPhase, InvalidTransition> {
        use SessionEvent::*;
        use SessionPhase::*;

        match (self, event) {
            (Unauthenticated, SignedIn) => Ok(Authenticated),
            (Authenticated, TokenExpired) => Ok(Expired),
            (Authenticated, AccountDisabled) => Ok(Disabled),
            (Authenticated, SignOut) => Ok(SignedOut),
            (Expired | Disabled | SignedOut, Reset) => Ok(Unauthenticated),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }

    /// 세션 종료 상태 여부
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Expired | SessionPhase::Disabled | SessionPhase::SignedOut)
    }
}
