use crate::error::{GitHubError, Result};
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_USER_AGENT: &str = "github-favorites/0.1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bearer token shared between the caller and the client.
///
/// Cloning yields another handle to the same value, so a token rotated
/// through any handle is used by the client's next request.
#[derive(Clone)]
pub struct AccessToken(Arc<RwLock<String>>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(Arc::new(RwLock::new(token.into())))
    }

    pub fn rotate(&self, token: impl Into<String>) {
        let mut guard = self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token.into();
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Result<String> {
        let guard = self.0.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        let token = guard.as_str();
        if token.is_empty() {
            return Err(GitHubError::Auth("access token is empty".to_string()));
        }
        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(GitHubError::Auth(
                "access token contains whitespace or control characters".to_string(),
            ));
        }
        Ok(format!("Bearer {}", token))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub token: AccessToken,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(endpoint: &str, token: AccessToken) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GitHubError::Config(format!("invalid endpoint {:?}: {}", endpoint, e)))?;

        match endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(GitHubError::Config(format!(
                    "unsupported endpoint scheme: {}",
                    scheme
                )))
            }
        }

        Ok(ClientConfig {
            endpoint,
            token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_reflects_rotation() {
        let token = AccessToken::new("first");
        let handle = token.clone();
        assert_eq!(token.bearer().unwrap(), "Bearer first");

        handle.rotate("second");
        assert_eq!(token.bearer().unwrap(), "Bearer second");
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(AccessToken::new("").bearer(), Err(GitHubError::Auth(_))));
        assert!(matches!(AccessToken::new("abc def").bearer(), Err(GitHubError::Auth(_))));
        assert!(matches!(AccessToken::new("abc\n").bearer(), Err(GitHubError::Auth(_))));
    }

    #[test]
    fn debug_hides_token() {
        let token = AccessToken::new("secret");
        assert!(!format!("{:?}", token).contains("secret"));
    }

    #[test]
    fn endpoint_must_be_http() {
        assert!(ClientConfig::new(DEFAULT_ENDPOINT, AccessToken::new("t")).is_ok());
        assert!(matches!(
            ClientConfig::new("ftp://example.com/graphql", AccessToken::new("t")),
            Err(GitHubError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("not a url", AccessToken::new("t")),
            Err(GitHubError::Config(_))
        ));
    }
}
