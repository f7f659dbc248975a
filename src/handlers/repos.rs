//! Repository-browsing handlers
//!
//! Thin pass-throughs over the GitHub REST API: list the caller's
//! repositories, list a repository's top-level tree, fetch one file's raw
//! content. The caller's bearer token is relayed on every call.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::models::FileContent;
use crate::AppState;

/// Extract the token from a `Bearer` Authorization header.
///
/// Missing or malformed headers are indistinguishable to the caller; both
/// come back as 401.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let missing = || AppError::Unauthorized("Authorization header missing".to_string());

    let auth_str = req
        .headers()
        .get("Authorization")
        .ok_or_else(missing)?
        .to_str()
        .map_err(|_| missing())?;

    if auth_str.len() > 7 && auth_str[..7].eq_ignore_ascii_case("Bearer ") {
        Ok(auth_str[7..].to_string())
    } else {
        Err(missing())
    }
}

/// GET /repos/
///
/// List the authenticated user's repositories as `[{name, owner}]`.
pub async fn list_repos(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req)?;

    let repos = state
        .github
        .list_repos(&token)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(repos))
}

/// GET /files/{owner}/{repo}/
///
/// List the top-level file tree as `[{name, path, type}]`. Top level only;
/// subdirectories are not recursed into.
pub async fn list_files(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req)?;
    let (owner, repo) = path.into_inner();

    let entries = state
        .github
        .list_contents(&token, &owner, &repo)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(entries))
}

/// GET /files/{owner}/{repo}/{file_path:.*}
///
/// Fetch one file's raw content as `{content}`. The tail match is greedy so
/// paths containing slashes route here and are forwarded verbatim.
pub async fn get_file_content(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req)?;
    let (owner, repo, file_path) = path.into_inner();

    let content = state
        .github
        .fetch_file(&token, &owner, &repo, &file_path)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Ok().json(FileContent { content }))
}

/// Configure repository-browsing routes
pub fn configure_repo_routes(cfg: &mut web::ServiceConfig) {
    // The exact tree route must be registered before the greedy file-path
    // route or "/files/{owner}/{repo}/" would match it with an empty tail.
    cfg.service(web::resource("/repos/").route(web::get().to(list_repos)));
    cfg.service(web::resource("/files/{owner}/{repo}/").route(web::get().to(list_files)));
    cfg.service(
        web::resource("/files/{owner}/{repo}/{file_path:.*}")
            .route(web::get().to(get_file_content)),
    );
}
