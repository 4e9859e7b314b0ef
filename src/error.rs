use crate::models::GraphQlError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("GraphQL error: {}", format_graphql_errors(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Pagination error: {0}")]
    Pagination(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitHubError {
    /// True when the failure was caused by the credentials rather than the request.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            GitHubError::Auth(_) => true,
            GitHubError::Http { status, .. } => *status == StatusCode::UNAUTHORIZED,
            _ => false,
        }
    }
}

fn format_graphql_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, GitHubError>;
