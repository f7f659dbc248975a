use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Application-level error type
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed request field
    Validation(String),
    /// Missing or malformed Authorization header
    Unauthorized(String),
    /// GitHub rejected the code-for-token exchange
    TokenExchange(String),
    /// GitHub or Gemini call failed (non-success status or transport error)
    Upstream(String),
}

/// Every failure collapses to a single `{"error": <message>}` body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Unauthorized(msg) => write!(f, "{msg}"),
            Self::TokenExchange(msg) => write!(f, "{msg}"),
            Self::Upstream(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        match self {
            Self::Validation(_) | Self::TokenExchange(_) => HttpResponse::BadRequest().json(body),
            Self::Unauthorized(_) => HttpResponse::Unauthorized().json(body),
            Self::Upstream(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn status_codes_match_error_class() {
        assert_eq!(
            AppError::Validation("missing".into())
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("no header".into())
                .error_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::TokenExchange("denied".into())
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream("boom".into()).error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
