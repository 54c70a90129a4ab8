//! Auth-related types shared across the session and provider modules.

use serde::{Deserialize, Serialize};

/// A single identity claim: a named attribute supplied by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub name: String,
    pub value: String,
}

impl Claim {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Payload of the signed session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the provider's stable identifier for the user.
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Identity claims, in the order the provider supplied them.
    pub claims: Vec<Claim>,
}

/// A validated session, attached to the request by the auth gate.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub subject: String,
    pub claims: Vec<Claim>,
}
