pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod queries;
pub mod types;

pub use config::{AccessToken, ClientConfig};
pub use error::{GitHubError, Result};
pub use github::GitHubClient;
