use crate::client::{Navigator, LOGIN_PATH};

/// 보호된 화면 래퍼
/// Wraps a protected subtree. With no access token it renders nothing and
/// schedules a redirect to the login screen; otherwise children render
/// unmodified. The redirect is re-evaluated only when the token value changes.
#[derive(Debug, Default)]
pub struct RouteGuard {
    // None = 아직 평가 전
    last_token: Option<Option<String>>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<T, N, F>(&mut self, token: Option<&str>, navigator: &mut N, children: F) -> Option<T>
    where
        N: Navigator,
        F: FnOnce() -> T,
    {
        let token = token.filter(|token| !token.is_empty());

        let changed = match &self.last_token {
            Some(previous) => previous.as_deref() != token,
            None => true,
        };
        if changed {
            self.last_token = Some(token.map(str::to_owned));
            if token.is_none() {
                navigator.replace(LOGIN_PATH);
            }
        }

        token.map(|_| children())
    }
}
