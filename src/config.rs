use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_PORT: &str = "8080";
const SESSION_COOKIE_NAME: &str = "claimview_session";
const SESSION_TTL_DAYS: i64 = 7;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Certificate pair to serve HTTPS; plain HTTP when absent.
    pub tls: Option<TlsConfig>,
    pub session_secret: String,
    pub session_ttl_days: i64,
    pub cookie_name: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_uri: String,
}

#[derive(Debug, Clone)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `SESSION_SECRET`, `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`
    /// and `GOOGLE_REDIRECT_URI`. Optional: `PORT` (default 8080) and the
    /// `TLS_CERT_PATH`/`TLS_KEY_PATH` pair.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            tls: tls_from_env()?,
            session_secret: env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?,
            session_ttl_days: SESSION_TTL_DAYS,
            cookie_name: SESSION_COOKIE_NAME.to_string(),
            google_client_id: env::var("GOOGLE_CLIENT_ID")
                .context("GOOGLE_CLIENT_ID must be set")?,
            google_client_secret: env::var("GOOGLE_CLIENT_SECRET")
                .context("GOOGLE_CLIENT_SECRET must be set")?,
            google_redirect_uri: env::var("GOOGLE_REDIRECT_URI")
                .context("GOOGLE_REDIRECT_URI must be set")?,
        })
    }
}

fn tls_from_env() -> Result<Option<TlsConfig>> {
    match (env::var("TLS_CERT_PATH").ok(), env::var("TLS_KEY_PATH").ok()) {
        (Some(cert), Some(key)) => Ok(Some(TlsConfig {
            cert_path: PathBuf::from(cert),
            key_path: PathBuf::from(key),
        })),
        (None, None) => Ok(None),
        _ => bail!("TLS_CERT_PATH and TLS_KEY_PATH must be set together"),
    }
}
