use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// 토큰 디코딩 에러
/// Reasons a token payload could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token must have three non-empty dot-separated segments")]
    Segments,

    #[error("token payload is not valid base64url")]
    Base64,

    #[error("token payload is not a claims object with an integer exp: {0}")]
    Claims(String),
}

/// 서명 검증 없이 읽은 클레임
/// Claims read from a token without verifying its signature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub user_id: Option<u64>,
    pub email: Option<String>,
    pub role: Option<i32>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub iat: Option<i64>,
    /// 만료 시각 (초 단위 Unix timestamp)
    pub exp: i64,
}

impl TokenPayload {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// `exp` is in seconds; the comparison is made at millisecond precision.
    /// The server compares whole seconds, so the client may report expiry up
    /// to one second before the server rejects the token.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.saturating_mul(1000) < now.timestamp_millis()
    }
}

/// 서명 검증 없이 JWT payload 디코딩 (부수 효과 없음)
/// Decode a JWT payload without verifying it. Pure; never panics.
pub fn decode_unverified(token: &str) -> Result<TokenPayload, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
        return Err(DecodeError::Segments);
    }

    // 패딩이 붙어 있어도 허용
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::Base64)?;

    serde_json::from_slice(&bytes).map_err(|e| DecodeError::Claims(e.to_string()))
}

/// 토큰이 만료되었거나 읽을 수 없으면 true
/// A token that cannot be decoded counts as expired.
pub fn is_token_expired(token: &str, now: DateTime<Utc>) -> bool {
    match decode_unverified(token) {
        Ok(payload) => payload.is_expired_at(now),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_with_payload(json: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(json)
        )
    }

    #[test]
    fn test_decodes_claims() {
        let token = token_with_payload(r#"{"userId":7,"email":"a@b.co","role":0,"iat":100,"exp":200}"#);
        let payload = decode_unverified(&token).unwrap();

        assert_eq!(payload.user_id, Some(7));
        assert_eq!(payload.role, Some(0));
        assert_eq!(payload.exp, 200);
        assert_eq!(payload.token_type, None);
    }

    #[test]
    fn test_segment_count_enforced() {
        assert_eq!(decode_unverified("only.two"), Err(DecodeError::Segments));
        assert_eq!(decode_unverified("a.b.c.d"), Err(DecodeError::Segments));
        assert_eq!(decode_unverified("a..c"), Err(DecodeError::Segments));
        assert_eq!(decode_unverified(""), Err(DecodeError::Segments));
    }

    #[test]
    fn test_bad_base64_and_json() {
        assert_eq!(decode_unverified("a.!!!.c"), Err(DecodeError::Base64));

        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_unverified(&not_json), Err(DecodeError::Claims(_))));

        let no_exp = token_with_payload(r#"{"userId":7}"#);
        assert!(matches!(decode_unverified(&no_exp), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn test_padded_payload_accepted() {
        let padded = format!("a.{}==.c", URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#));
        assert_eq!(decode_unverified(&padded).unwrap().exp, 1);
    }

    #[test]
    fn test_expiry_comparison() {
        let now = Utc::now();
        let past = token_with_payload(&format!(r#"{{"exp":{}}}"#, (now - Duration::seconds(1)).timestamp()));
        let future = token_with_payload(&format!(r#"{{"exp":{}}}"#, (now + Duration::minutes(5)).timestamp()));

        assert!(is_token_expired(&past, now));
        assert!(!is_token_expired(&future, now));
        assert!(is_token_expired("garbage", now));
    }
}
