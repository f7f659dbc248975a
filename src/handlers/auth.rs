//! OAuth handlers
//!
//! The two-step GitHub OAuth flow: redirect the browser to GitHub, then
//! exchange the authorization code the frontend got back for an access token.
//! No server-side state lives between the two steps; the client carries the
//! code.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{TokenRequest, TokenResponse};
use crate::services::GithubError;
use crate::AppState;

/// GET /github/login/
///
/// Redirects the user to GitHub's authorization page. The redirect URI in the
/// authorization URL points at the frontend, which handles the callback.
pub async fn github_login(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let url = state
        .github
        .authorize_url()
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(HttpResponse::Found()
        .append_header(("Location", url.as_str()))
        .finish())
}

/// POST /github/token/
///
/// The frontend posts the `code` from the OAuth callback here; we exchange it
/// for an access token using the client credentials.
pub async fn exchange_token(
    state: web::Data<AppState>,
    body: web::Json<TokenRequest>,
) -> Result<HttpResponse, AppError> {
    let code = body
        .into_inner()
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::Validation("Authorization code not provided".to_string()))?;

    let access_token = state
        .github
        .exchange_code(&code)
        .await
        .map_err(map_github_error)?;

    Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
}

fn map_github_error(e: GithubError) -> AppError {
    match e {
        GithubError::TokenExchangeFailed | GithubError::AccessTokenMissing => {
            AppError::TokenExchange(e.to_string())
        }
        other => AppError::Upstream(other.to_string()),
    }
}

/// Configure OAuth routes
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/github/login/").route(web::get().to(github_login)));
    cfg.service(web::resource("/github/token/").route(web::post().to(exchange_token)));
}
