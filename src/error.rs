//! Error handling for the request pipeline.
//!
//! Handlers return [`AppError`] through `?`; the `IntoResponse` impl is the
//! single top-level funnel: it logs the failure once at error severity and
//! answers 500 with the error's message as plain text. Routing misses and
//! unauthenticated access are not errors and never reach it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::provider::ProviderError;
use crate::auth::session::SessionError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Failure inside the OAuth exchange with the identity provider.
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Failure issuing or validating the session cookie.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Anything else.
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // One error record per failure; the request span carries the route.
        tracing::error!(error = ?self, "handler failed");

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
