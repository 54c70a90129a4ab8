//! Cookie-session authentication backed by Google OAuth.
//!
//! This module provides:
//! - A signed-cookie session scheme ([`Sessions`])
//! - The Google OAuth challenge/callback flow ([`handlers`], [`provider`])
//! - The [`gate::require_session`] guard for protected routes

pub mod gate;
pub mod handlers;
pub mod provider;
pub mod session;
pub mod types;

/// Path the provider redirects back to after consent.
pub const CALLBACK_PATH: &str = "/signin-google";

pub use provider::{GoogleProvider, IdentityProvider};
pub use session::Sessions;
