//! Request/response shapes for the OAuth and repository-browsing endpoints.
//!
//! Everything here is transient: rebuilt from the upstream response on every
//! call, never stored server-side.

use serde::{Deserialize, Serialize};

/// Body of `POST /github/token/`
///
/// `code` is optional at the serde level so a missing field produces our own
/// 400 payload instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub code: Option<String>,
}

/// Response of `POST /github/token/`
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// One repository of the authenticated user, projected to `{name, owner}`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RepoSummary {
    pub name: String,
    pub owner: String,
}

/// One entry of a repository's top-level file tree
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    /// `"file"` or `"dir"`, relayed as GitHub reports it
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// Raw text of a single repository file
#[derive(Debug, Serialize)]
pub struct FileContent {
    pub content: String,
}
