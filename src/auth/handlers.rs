//! Login, callback, and logout handlers.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::AppState;

use super::provider::ProviderError;
use super::session::{cookie_value, Sessions};

/// Cookie carrying the OAuth `state` value across the round trip to Google.
const STATE_COOKIE: &str = "oauth_state";

// The state cookie only needs to outlive the consent screen.
const STATE_TTL_SECONDS: u32 = 600;

/// Where a completed login lands.
const POST_LOGIN_TARGET: &str = "/user";

/// Start the Google login: mint a state value and send the user to consent.
pub async fn challenge(State(app): State<AppState>) -> Response {
    let csrf = Uuid::new_v4().to_string();
    let url = app.provider.authorize_url(&csrf);
    let cookie = format!(
        "{STATE_COOKIE}={csrf}; Path=/; HttpOnly; SameSite=Lax; Max-Age={STATE_TTL_SECONDS}{}",
        app.sessions.secure_suffix()
    );

    (
        StatusCode::FOUND,
        [(header::LOCATION, url), (header::SET_COOKIE, cookie)],
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Provider callback: verify state, redeem the code, establish the session.
pub async fn callback(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> AppResult<Response> {
    if let Some(error) = params.error {
        return Err(ProviderError::Callback(format!("provider returned {error:?}")).into());
    }

    let expected = cookie_value(&headers, STATE_COOKIE);
    if expected.is_none() || expected != params.state {
        return Err(ProviderError::Callback("state mismatch".into()).into());
    }

    let code = params
        .code
        .ok_or_else(|| ProviderError::Callback("missing code".into()))?;

    let identity = app.provider.exchange_code(&code).await?;
    tracing::info!(subject = %identity.subject, "login completed");

    let token = app.sessions.issue(&identity.subject, identity.claims)?;

    Ok((
        StatusCode::SEE_OTHER,
        AppendHeaders([
            (header::LOCATION, POST_LOGIN_TARGET.to_string()),
            (header::SET_COOKIE, app.sessions.login_cookie(&token)),
            (header::SET_COOKIE, clear_state_cookie(&app.sessions)),
        ]),
    )
        .into_response())
}

/// Sign out: clear the session cookie and go home.
pub async fn logout(State(app): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, "/".to_string()),
            (header::SET_COOKIE, app.sessions.clear_cookie()),
        ],
    )
}

fn clear_state_cookie(sessions: &Sessions) -> String {
    format!(
        "{STATE_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
        sessions.secure_suffix()
    )
}
