//! testgen - backend-for-frontend proxy for AI-assisted test generation
//!
//! Mediates GitHub OAuth login, browses a user's repositories and files via
//! the GitHub REST API, and forwards code snippets to Gemini to produce
//! test-case summaries and test code. Every handler is a stateless
//! pass-through; nothing is persisted between requests.

use actix_cors::Cors;
use actix_web::http::header;
use url::Url;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

use services::{GeminiClient, GithubClient};

/// Application state shared across handlers
///
/// Built once in `main` from config; holds the outbound clients with their
/// static credentials. Caller bearer tokens never land here.
pub struct AppState {
    pub config: Config,
    pub github: GithubClient,
    pub gemini: GeminiClient,
}

/// CORS layer for the browser frontend.
///
/// The frontend lives at the redirect URI's origin; only that origin may call
/// the API. An unparseable redirect URI falls back to a permissive layer.
pub fn frontend_cors(frontend_redirect_uri: &str) -> Cors {
    let frontend_origin = Url::parse(frontend_redirect_uri)
        .ok()
        .map(|u| u.origin().ascii_serialization());

    match frontend_origin.as_deref() {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE]),
        None => Cors::permissive(),
    }
}
