//! Request/response shapes for the Gemini-backed generation endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /generate/summaries/`
#[derive(Debug, Deserialize)]
pub struct SummariesRequest {
    pub code_content: Option<String>,
}

/// Response of `POST /generate/summaries/`
#[derive(Debug, Serialize)]
pub struct SummariesResponse {
    pub summaries: Vec<String>,
}

/// Body of `POST /generate/code/`
#[derive(Debug, Deserialize)]
pub struct TestCodeRequest {
    pub code_content: Option<String>,
    pub summary: Option<String>,
    /// Test framework to target (default: `unittest`)
    pub framework: Option<String>,
}

/// Response of `POST /generate/code/`
///
/// The model is prompted to return only a code block; nothing validates that
/// it actually did.
#[derive(Debug, Serialize)]
pub struct TestCodeResponse {
    pub test_code: String,
}
