use std::sync::Arc;

use crate::shared::database::{UserStore, UserStoreError};
use crate::domains::auth::models::{
    NewUser, SigninRequest, SignupRequest, TokenPair, User, ROLE_USER, STATUS_ACTIVE,
};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};

const MIN_PASSWORD_LEN: usize = 8;

// users 테이블 컬럼 길이
const MAX_EMAIL_LEN: usize = 255;
const MAX_USERNAME_LEN: usize = 100;

// 인증 서비스
// AuthService: handles authentication business logic
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt_service: JwtService) -> Self {
        Self { users, jwt_service }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        let email = request.email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(AuthError::InvalidInput("email address is not valid".to_string()));
        }
        check_max_len("email", &email, MAX_EMAIL_LEN)?;

        let username = request
            .username
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if let Some(name) = &username {
            check_max_len("username", name, MAX_USERNAME_LEN)?;
        }
        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        // 1. 이메일 중복 확인
        let existing_user = self
            .users
            .find_user_by_email(&email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email existence: {}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email });
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 3. 사용자 생성 (일반 사용자, 활성 상태)
        let user = self
            .users
            .create_user(NewUser {
                email,
                password_hash,
                username,
                role: ROLE_USER,
                status: STATUS_ACTIVE,
            })
            .await
            .map_err(|e| match e.downcast_ref::<UserStoreError>() {
                // 중복 확인 이후 동시 가입으로 생긴 충돌
                Some(UserStoreError::EmailTaken { email }) => AuthError::EmailAlreadyExists { email: email.clone() },
                None => AuthError::DatabaseError(format!("Failed to create user: {}", e)),
            })?;

        tracing::info!(user_id = user.id, "user signed up");
        Ok(user)
    }

    // 로그인 (비즈니스 로직)
    // Returns: (User, access + refresh tokens)
    pub async fn signin(&self, request: SigninRequest) -> Result<(User, TokenPair), AuthError> {
        let email = request.email.trim().to_lowercase();

        // 1. 이메일로 사용자 조회
        let user = self
            .users
            .find_user_by_email(&email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        Self::verify_password(&request.password, &user.password_hash)?;

        // 3. 비활성 사용자는 로그인 불가
        if !user.is_active() {
            return Err(AuthError::UserDisabled { id: user.id });
        }

        // 4. 토큰 발급
        let tokens = self.jwt_service.generate_token_pair(&user)?;

        tracing::info!(user_id = user.id, "user signed in");
        Ok((user, tokens))
    }

    /// Refresh Token 검증 및 새 토큰 쌍 발급
    /// Verify refresh token and issue a new token pair.
    /// Stateless: the previous refresh token stays valid until it expires.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        // 1. 서명/만료/타입 검증
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;

        // 2. 사용자 상태 재확인
        let user = self.active_user(claims.user_id).await?;

        // 3. 새 토큰 쌍 발급
        self.jwt_service.generate_token_pair(&user)
    }

    pub async fn get_user_info(&self, user_id: u64) -> Result<User, AuthError> {
        self.active_user(user_id).await
    }

    async fn active_user(&self, user_id: u64) -> Result<User, AuthError> {
        let user = self
            .users
            .find_user_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::UserNotFound { id: user_id })?;

        if !user.is_active() {
            return Err(AuthError::UserDisabled { id: user_id });
        }
        Ok(user)
    }

    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}

// VARCHAR(n)은 문자 수 기준
fn check_max_len(name: &str, value: &str, max: usize) -> Result<(), AuthError> {
    if value.chars().count() > max {
        return Err(AuthError::InvalidInput(format!(
            "{name} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
