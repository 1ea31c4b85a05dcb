// Session token issuing and verification (HS256)
//
// verify() deliberately collapses every failure mode (malformed token, bad
// signature, expired) into None. Callers handle "invalid" uniformly and
// cannot leak the cause to the client.

use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::Duration;
use uuid::Uuid;
use watchpost_core::{Claims, Role};

/// Issues and verifies signed, self-contained session tokens.
/// Keys are built once from config at startup; no runtime rotation.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry, no clock leeway
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        }
    }

    /// Issue a token for an authenticated user. Expiry is fixed at the
    /// configured lifetime (24 hours) from issuance.
    pub fn issue(&self, user_id: Uuid, org_id: Uuid, role: Role) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            org: org_id,
            role,
            iat: now,
            exp: now + self.lifetime.as_secs() as i64,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify signature and expiry. Any failure is None; the cause is not
    /// observable by the caller.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .ok()
            .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(86400))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let user_id = Uuid::now_v7();
        let org_id = Uuid::now_v7();

        let token = svc.issue(user_id, org_id, Role::Admin).unwrap();
        let claims = svc.verify(&token).expect("fresh token must verify");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.org, org_id);
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp - claims.iat == 86400);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let svc = service();
        // Encode an already-expired claim set with the same secret
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::now_v7(),
            org: Uuid::now_v7(),
            role: Role::Admin,
            iat: now - 90_000,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(svc.verify(&token).is_none());
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let svc = service();
        let token = svc
            .issue(Uuid::now_v7(), Uuid::now_v7(), Role::Admin)
            .unwrap();

        // Flip one byte in the signed payload segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(svc.verify(&tampered).is_none());
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let svc = service();
        let other = TokenService::new("other-secret", Duration::from_secs(86400));

        let token = other
            .issue(Uuid::now_v7(), Uuid::now_v7(), Role::Admin)
            .unwrap();
        assert!(svc.verify(&token).is_none());
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let svc = service();
        assert!(svc.verify("not-a-token").is_none());
        assert!(svc.verify("").is_none());
        assert!(svc.verify("a.b.c").is_none());
    }
}
