//! The auth gate for protected routes.
//!
//! Applied with `axum::middleware::from_fn_with_state`. A valid session is
//! attached to the request and control passes on; anything else gets the
//! login page back at 200, not a redirect and not a 401.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::{views, AppState};

/// Guard for routes that need an authenticated session.
pub async fn require_session(
    State(app): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match app.sessions.extract(request.headers()) {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => Html(views::login_page()).into_response(),
    }
}
