// src/domains/auth/services/jwt_service.rs
use crate::shared::errors::AuthError;
use crate::domains::auth::models::jwt::{AccessClaims, RefreshClaims, REFRESH_TOKEN_TYPE};
use crate::domains::auth::models::user::User;
use crate::domains::auth::models::auth::TokenPair;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JWT 서비스
/// JWT Service for token generation and verification
///
/// Tokens are HS256-signed and stateless: validity depends only on the
/// signature and the `exp` claim.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료 시각을 정확히 적용 (기본 leeway 60초 제거)
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Access Token 발급 (24시간)
    /// Generate Access Token (24h lifetime)
    pub fn generate_access_token(&self, user: &User) -> Result<String, AuthError> {
        self.generate_access_token_at(user, Utc::now())
    }

    pub fn generate_access_token_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        self.sign(&AccessClaims::new(user, issued_at))
    }

    /// Refresh Token 발급 (7일)
    /// Generate Refresh Token (7d lifetime)
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AuthError> {
        self.generate_refresh_token_at(user, Utc::now())
    }

    pub fn generate_refresh_token_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        self.sign(&RefreshClaims::new(user, issued_at))
    }

    /// Access + Refresh 토큰 쌍 발급
    /// Issue both tokens for a user
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        let now = Utc::now();
        Ok(TokenPair {
            access_token: self.generate_access_token_at(user, now)?,
            refresh_token: self.generate_refresh_token_at(user, now)?,
        })
    }

    /// Access Token 검증
    /// Verify Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.verify::<AccessClaims>(token)
    }

    /// Refresh Token 검증
    /// Verify Refresh Token; an access token is rejected as malformed
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        let claims = self.verify::<RefreshClaims>(token)?;
        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(AuthError::MalformedToken);
        }
        Ok(claims)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate token: {}", e)))
    }

    fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, AuthError> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })
    }
}
