// Auth domain module
// 인증 도메인: 회원가입, 로그인, 토큰 발급/갱신, 내 정보
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::*;
pub use routes::*;
pub use services::*;
