use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub OAuth application client id
    pub github_client_id: String,
    /// GitHub OAuth application client secret
    pub github_client_secret: String,
    /// Frontend URL the OAuth flow redirects back to
    pub frontend_redirect_uri: String,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Gemini model name (default: gemini-1.5-flash)
    pub gemini_model: String,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Timeout for outbound GitHub/Gemini calls in seconds (default: 30)
    pub upstream_timeout_secs: u64,
    /// GitHub REST API base URL (overridable for tests)
    pub github_api_url: String,
    /// GitHub OAuth base URL (overridable for tests)
    pub github_oauth_url: String,
    /// Gemini API base URL (overridable for tests)
    pub gemini_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_client_id = env::var("GITHUB_CLIENT_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GITHUB_CLIENT_ID"))?;

        let github_client_secret = env::var("GITHUB_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("GITHUB_CLIENT_SECRET"))?;

        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY"))?;

        let frontend_redirect_uri = env::var("FRONTEND_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/".to_string());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS"))?;

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());

        let github_oauth_url =
            env::var("GITHUB_OAUTH_URL").unwrap_or_else(|_| "https://github.com".to_string());

        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        Ok(Self {
            github_client_id,
            github_client_secret,
            frontend_redirect_uri,
            gemini_api_key,
            gemini_model,
            host,
            port,
            upstream_timeout_secs,
            github_api_url,
            github_oauth_url,
            gemini_base_url,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
