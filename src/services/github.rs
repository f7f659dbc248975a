//! GitHub client
//!
//! Outbound calls to GitHub's OAuth token endpoint and REST API. The caller's
//! bearer token is relayed per request and never stored here; only the OAuth
//! application credentials live in the client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::models::{FileEntry, RepoSummary};

/// OAuth scopes requested during login
const OAUTH_SCOPES: &str = "repo,read:user";

/// Errors that can occur while talking to GitHub
#[derive(Debug, Error)]
pub enum GithubError {
    /// Token endpoint answered with a non-success status. The upstream body
    /// is deliberately discarded; callers get a generic message.
    #[error("Failed to get access token")]
    TokenExchangeFailed,

    /// Token endpoint answered 2xx but without an `access_token` field
    #[error("access token missing from GitHub response")]
    AccessTokenMissing,

    #[error("invalid GitHub URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// What GitHub returns from `/user/repos`, reduced to the fields we project
#[derive(Debug, Deserialize)]
struct RepoItem {
    name: String,
    owner: OwnerItem,
}

#[derive(Debug, Deserialize)]
struct OwnerItem {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    entry_type: String,
}

#[derive(Debug, Deserialize)]
struct AccessTokenPayload {
    access_token: Option<String>,
}

/// Client for GitHub's OAuth and REST endpoints
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.github_api_url.clone(),
            oauth_url: config.github_oauth_url.clone(),
            client_id: config.github_client_id.clone(),
            client_secret: config.github_client_secret.clone(),
            redirect_uri: config.frontend_redirect_uri.clone(),
        })
    }

    /// Build the authorization URL the browser is redirected to.
    ///
    /// The redirect URI points at the frontend, which receives the `code`
    /// and posts it back to the token-exchange endpoint.
    pub fn authorize_url(&self) -> Result<Url, GithubError> {
        let mut url = Url::parse(&self.oauth_url)?.join("/login/oauth/authorize")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", OAUTH_SCOPES);
        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The redirect URI must exactly match the one used in `authorize_url`.
    pub async fn exchange_code(&self, code: &str) -> Result<String, GithubError> {
        let url = format!("{}/login/oauth/access_token", self.oauth_url);
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token exchange rejected");
            return Err(GithubError::TokenExchangeFailed);
        }

        let payload: AccessTokenPayload = response.json().await?;
        payload.access_token.ok_or(GithubError::AccessTokenMissing)
    }

    /// List the authenticated user's repositories as `{name, owner}` pairs.
    pub async fn list_repos(&self, access_token: &str) -> Result<Vec<RepoSummary>, GithubError> {
        let url = format!("{}/user/repos", self.api_url);
        let repos: Vec<RepoItem> = self
            .client
            .get(&url)
            .header("Authorization", format!("token {access_token}"))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(repos
            .into_iter()
            .map(|repo| RepoSummary {
                name: repo.name,
                owner: repo.owner.login,
            })
            .collect())
    }

    /// List a repository's top-level contents. Does not recurse.
    pub async fn list_contents(
        &self,
        access_token: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<FileEntry>, GithubError> {
        let url = format!("{}/repos/{owner}/{repo}/contents/", self.api_url);
        let entries: Vec<ContentItem> = self
            .client
            .get(&url)
            .header("Authorization", format!("token {access_token}"))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries
            .into_iter()
            .map(|entry| FileEntry {
                name: entry.name,
                path: entry.path,
                entry_type: entry.entry_type,
            })
            .collect())
    }

    /// Fetch one file's raw content as text.
    ///
    /// The path is forwarded verbatim, slashes included. Known gap: binary
    /// files are decoded lossily as UTF-8 text, no encoding detection.
    pub async fn fetch_file(
        &self,
        access_token: &str,
        owner: &str,
        repo: &str,
        file_path: &str,
    ) -> Result<String, GithubError> {
        let url = format!("{}/repos/{owner}/{repo}/contents/{file_path}", self.api_url);
        let content = self
            .client
            .get(&url)
            .header("Authorization", format!("token {access_token}"))
            .header("Accept", "application/vnd.github.v3.raw")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(content)
    }
}
