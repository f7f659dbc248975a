//! Generation handlers
//!
//! Forward code snippets to Gemini to produce test-case summaries and test
//! code. The prompts are a contract with the model, not an enforced one:
//! nothing validates that the output is well-formed code.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{SummariesRequest, SummariesResponse, TestCodeRequest, TestCodeResponse};
use crate::services::prompts;
use crate::AppState;

fn require_field(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

/// POST /generate/summaries/
///
/// `{code_content}` in, `{summaries: [string]}` out. The model is asked for a
/// bullet list; its output is split into one summary per line.
pub async fn generate_summaries(
    state: web::Data<AppState>,
    body: web::Json<SummariesRequest>,
) -> Result<HttpResponse, AppError> {
    let code_content = require_field(body.into_inner().code_content, "No code content provided")?;

    let prompt = prompts::summaries_prompt(&code_content);
    let text = state
        .gemini
        .generate_text(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(SummariesResponse {
        summaries: prompts::parse_summaries(&text),
    }))
}

/// POST /generate/code/
///
/// `{code_content, summary, framework?}` in, `{test_code}` out. The model's
/// output is relayed verbatim.
pub async fn generate_code(
    state: web::Data<AppState>,
    body: web::Json<TestCodeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let code_content = require_field(request.code_content, "Code content or summary missing")?;
    let summary = require_field(request.summary, "Code content or summary missing")?;
    let framework = request
        .framework
        .unwrap_or_else(|| prompts::DEFAULT_FRAMEWORK.to_string());

    let prompt = prompts::test_code_prompt(&code_content, &summary, &framework);
    let test_code = state
        .gemini
        .generate_text(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TestCodeResponse { test_code }))
}

/// Configure generation routes
pub fn configure_generate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/generate/summaries/").route(web::post().to(generate_summaries)));
    cfg.service(web::resource("/generate/code/").route(web::post().to(generate_code)));
}
