//! 클라이언트 세션 관리
//! Browser-side session logic, independent of any UI framework.
//!
//! Everything here is advisory: tokens are inspected without signature
//! verification so the UI can react before the server rejects a request.
//! Side effects (storage, navigation, notices) go through small traits so a
//! front end can plug in its own implementations.

pub mod guard;
pub mod monitor;
pub mod state;
pub mod storage;
pub mod token;

pub use guard::*;
pub use monitor::*;
pub use state::*;
pub use storage::*;
pub use token::*;

/// 로그인 화면 경로
pub const LOGIN_PATH: &str = "/login";

/// 화면 이동 (history replace)
/// Navigation side effect. Redirects to the login screen always replace the
/// current history entry.
pub trait Navigator {
    fn replace(&mut self, path: &str);
}

/// 사용자 알림
pub trait Notifier {
    fn notify(&mut self, message: &str);
}
