//! The route table.
//!
//! Five GET pages plus the provider callback. Anything else, unknown path or
//! unsupported method alike, lands on the not-found handler.

use axum::{
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{auth, handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get_only(handlers::home))
        .route("/login", get_only(handlers::login))
        .route(
            "/user",
            get(handlers::user)
                // route_layer keeps the gate off the method fallback, so a
                // POST to /user is still a plain 404.
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::gate::require_session,
                ))
                .fallback(handlers::not_found),
        )
        .route("/logout", get_only(auth::handlers::logout))
        .route("/google-auth", get_only(auth::handlers::challenge))
        .route(auth::CALLBACK_PATH, get_only(auth::handlers::callback))
        .fallback(handlers::not_found)
        // Failed requests are logged once by AppError; the layer's own
        // failure record is disabled.
        .layer(TraceLayer::new_for_http().on_failure(()))
        .with_state(state)
}

/// GET-only dispatch where a method miss is a routing miss, not a 405.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::not_found)
}
