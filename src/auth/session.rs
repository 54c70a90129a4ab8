//! Cookie-backed sessions, signed as HS256 JWTs.
//!
//! [`Sessions`] owns the cookie name, signing secret, and lifetime. It issues
//! the token at login, validates it on each gated request, and builds the
//! `Set-Cookie` values for login and logout.

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::types::{AuthSession, Claim, SessionClaims};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Issues and validates the signed session cookie.
#[derive(Clone)]
pub struct Sessions {
    cookie_name: String,
    secret: String,
    ttl_days: i64,
    secure: bool,
}

impl Sessions {
    pub fn new(
        cookie_name: impl Into<String>,
        secret: impl Into<String>,
        ttl_days: i64,
        secure: bool,
    ) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            secret: secret.into(),
            ttl_days,
            secure,
        }
    }

    /// Sign a new session token for `subject` carrying `claims`.
    pub fn issue(&self, subject: &str, claims: Vec<Claim>) -> Result<String, SessionError> {
        let now = Utc::now();
        let payload = SessionClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.ttl_days)).timestamp(),
            claims,
        };
        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Validate a session token's signature and expiry.
    pub fn verify(&self, token: &str) -> Result<AuthSession, SessionError> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(AuthSession {
            subject: data.claims.sub,
            claims: data.claims.claims,
        })
    }

    /// Pull a valid session out of the request headers, if there is one.
    pub fn extract(&self, headers: &HeaderMap) -> Option<AuthSession> {
        let token = cookie_value(headers, &self.cookie_name)?;
        self.verify(&token).ok()
    }

    /// `Set-Cookie` value establishing the session.
    pub fn login_cookie(&self, token: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
            self.cookie_name,
            token,
            self.ttl_days * 24 * 60 * 60,
            self.secure_suffix()
        )
    }

    /// `Set-Cookie` value destroying the session.
    pub fn clear_cookie(&self) -> String {
        format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
            self.cookie_name,
            self.secure_suffix()
        )
    }

    /// `; Secure` when serving TLS, empty otherwise. Every cookie the app
    /// sets carries this tail, the state cookie included.
    pub(crate) fn secure_suffix(&self) -> &'static str {
        if self.secure {
            "; Secure"
        } else {
            ""
        }
    }
}

/// Find a cookie by name in the request's `Cookie` header.
pub(crate) fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for part in cookie_header.split(';') {
        if let Ok(c) = cookie::Cookie::parse(part.trim()) {
            if c.name() == name {
                return Some(c.value().to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn sessions() -> Sessions {
        Sessions::new("session_test", "test-secret-key-for-testing-only", 7, false)
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let sessions = sessions();
        let claims = vec![
            Claim::new("name", "Test User"),
            Claim::new("email", "test@example.com"),
        ];

        let token = sessions
            .issue("sub-1", claims.clone())
            .expect("should issue token");
        let session = sessions.verify(&token).expect("should verify token");

        assert_eq!(session.subject, "sub-1");
        assert_eq!(session.claims, claims);
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = sessions().issue("sub-1", vec![]).expect("should issue token");
        let other = Sessions::new("session_test", "a-different-secret", 7, false);
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let expired = Sessions::new("session_test", "secret", -1, false);
        let token = expired.issue("sub-1", vec![]).expect("should issue token");
        assert!(expired.verify(&token).is_err());
    }

    #[test]
    fn tampered_token_rejected() {
        let sessions = sessions();
        let mut token = sessions.issue("sub-1", vec![]).expect("should issue token");
        token.push('x');
        assert!(sessions.verify(&token).is_err());
    }

    #[test]
    fn extract_ignores_missing_and_garbage_cookies() {
        let sessions = sessions();

        let headers = HeaderMap::new();
        assert!(sessions.extract(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session_test=not-a-token; other=1"),
        );
        assert!(sessions.extract(&headers).is_none());
    }

    #[test]
    fn extract_finds_the_session_among_other_cookies() {
        let sessions = sessions();
        let token = sessions
            .issue("sub-1", vec![Claim::new("name", "Alice")])
            .expect("should issue token");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("first=1; session_test={token}; last=2")).unwrap(),
        );

        let session = sessions.extract(&headers).expect("should find session");
        assert_eq!(session.subject, "sub-1");
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = sessions().clear_cookie();
        assert!(cookie.starts_with("session_test=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn cookies_are_secure_only_under_tls() {
        let plain = sessions();
        assert!(!plain.clear_cookie().contains("Secure"));

        let tls = Sessions::new("session_test", "secret", 7, true);
        assert!(tls.login_cookie("tok").contains("; Secure"));
    }
}
