pub mod gemini;
pub mod github;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiError};
pub use github::{GithubClient, GithubError};
