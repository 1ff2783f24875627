// Auth domain services
// JwtService: 토큰 서명/검증, AuthService: 계정 흐름
pub mod auth_service;
pub mod jwt_service;
pub mod state;

pub use auth_service::AuthService;
pub use jwt_service::JwtService;
pub use state::AuthState;
