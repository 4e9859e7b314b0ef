use clap::Parser;
use colored::*;
use github_favorites::cli::{Cli, Command};
use github_favorites::{GitHubClient, GitHubError};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout carries only the result payload
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            if e
                .downcast_ref::<GitHubError>()
                .is_some_and(GitHubError::is_auth_failure)
            {
                eprintln!(
                    "{}",
                    "Check that GITHUB_ACCESS_TOKEN holds a valid personal access token".yellow()
                );
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = GitHubClient::new(cli.client_config()?)?;

    match &cli.command {
        Command::List {
            organization,
            cursor,
            all: false,
        } => {
            let page = client
                .list_repositories(organization, cursor.as_deref())
                .await?;
            print_json(&page, cli.compact)
        }
        Command::List {
            organization,
            all: true,
            ..
        } => {
            let repositories = client.list_all_repositories(organization).await?;
            print_json(&repositories, cli.compact)
        }
        Command::Star { repository_id } => {
            let outcome = client.add_favorite(repository_id).await?;
            print_json(&outcome, cli.compact)
        }
        Command::Unstar { repository_id } => {
            let outcome = client.remove_favorite(repository_id).await?;
            print_json(&outcome, cli.compact)
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", rendered);
    Ok(())
}
