//! Helpers shared by the handler HTTP tests.

use actix_web::web;

use crate::services::{GeminiClient, GithubClient};
use crate::{AppState, Config};

/// Config pointing every upstream at the given base URLs (wiremock servers).
pub(crate) fn test_config(github_api: &str, github_oauth: &str, gemini: &str) -> Config {
    Config {
        github_client_id: "test-client-id".into(),
        github_client_secret: "test-client-secret".into(),
        frontend_redirect_uri: "http://localhost:3000/".into(),
        gemini_api_key: "test-gemini-key".into(),
        gemini_model: "gemini-1.5-flash".into(),
        host: "127.0.0.1".into(),
        port: 8080,
        upstream_timeout_secs: 5,
        github_api_url: github_api.into(),
        github_oauth_url: github_oauth.into(),
        gemini_base_url: gemini.into(),
    }
}

pub(crate) fn test_state(github_api: &str, github_oauth: &str, gemini: &str) -> web::Data<AppState> {
    let config = test_config(github_api, github_oauth, gemini);
    let github = GithubClient::new(&config).expect("github client");
    let gemini = GeminiClient::new(&config).expect("gemini client");
    web::Data::new(AppState {
        config,
        github,
        gemini,
    })
}
