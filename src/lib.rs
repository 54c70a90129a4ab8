//! claimview is a small demo web app: users sign in with their Google
//! account and get a page listing the identity claims the provider returned.
//!
//! The library exposes [`app`] so integration tests can drive the router
//! without binding a socket; `main.rs` adds config loading and the listener.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;

use crate::auth::{GoogleProvider, IdentityProvider, Sessions};
use crate::config::AppConfig;

/// Shared application context, cloned into every handler via router state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Sessions,
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Wire up the real collaborators from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sessions: Sessions::new(
                config.cookie_name.clone(),
                config.session_secret.clone(),
                config.session_ttl_days,
                config.tls.is_some(),
            ),
            provider: Arc::new(GoogleProvider::new(
                config.google_client_id.clone(),
                config.google_client_secret.clone(),
                config.google_redirect_uri.clone(),
            )),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
