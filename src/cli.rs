use crate::config::{AccessToken, ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::error::{GitHubError, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "github-favorites")]
#[command(about = "List an organization's most starred repositories and star or unstar repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Personal access token sent as a bearer token
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print results as single-line JSON
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List an organization's repositories, most starred first, five per page
    List {
        /// Organization login, e.g. the-road-to-learn-react
        organization: String,

        /// End cursor of the previous page
        #[arg(long, conflicts_with = "all")]
        cursor: Option<String>,

        /// Follow cursors until every repository has been fetched
        #[arg(long)]
        all: bool,
    },
    /// Star a repository by node id
    Star { repository_id: String },
    /// Remove the star from a repository by node id
    Unstar { repository_id: String },
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig> {
        let token = self.token.clone().ok_or_else(|| {
            GitHubError::Auth("GITHUB_ACCESS_TOKEN is not set".to_string())
        })?;

        Ok(ClientConfig::new(&self.endpoint, AccessToken::new(token))?
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}
