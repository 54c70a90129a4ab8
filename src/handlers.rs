//! Handlers for the page routes.

use axum::{http::StatusCode, response::Html, Extension};

use crate::auth::types::AuthSession;
use crate::views;

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

pub async fn login() -> Html<String> {
    Html(views::login_page())
}

/// Profile page. Only reachable through the auth gate, which attaches the
/// validated session to the request.
pub async fn user(Extension(session): Extension<AuthSession>) -> Html<String> {
    Html(views::user_page(&session.claims))
}

/// Fallback for every path and method the route table does not know.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
