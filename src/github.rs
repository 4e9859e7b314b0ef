use crate::config::{AccessToken, ClientConfig};
use crate::error::{GitHubError, Result};
use crate::models::{GraphQlRequest, GraphQlResponse, RateLimitState, StarPayload};
use crate::queries::{
    AddFavorite, AddFavoriteVariables, Operation, RemoveFavorite, RemoveFavoriteVariables,
    RepositoriesForOrganization, RepositoriesVariables, PAGE_SIZE,
};
use crate::types::{OrganizationRepositories, RepositoryPage, RepositorySummary, StarOutcome};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

const LOW_RATE_LIMIT: u32 = 10;

pub struct GitHubClient {
    client: Client,
    endpoint: Url,
    token: AccessToken,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            endpoint: config.endpoint,
            token: config.token,
        })
    }

    /// Handle to the token used for every request; rotating it affects the next call.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Send one catalog operation and return its `data`.
    ///
    /// The `Authorization` header is built from the token's current value
    /// right before the request leaves. Transport failures, non-2xx statuses
    /// and a GraphQL `errors` array are all returned as `Err`.
    pub async fn execute<O: Operation>(&self, variables: &O::Variables) -> Result<O::ResponseData> {
        let authorization = self.token.bearer()?;
        let body = GraphQlRequest {
            query: O::DOCUMENT,
            operation_name: O::NAME,
            variables,
        };

        debug!(operation = O::NAME, endpoint = %self.endpoint, "Dispatching GraphQL operation");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .json(&body)
            .send()
            .await?;

        if let Some(rate_limit) = RateLimitState::from_headers(response.headers()) {
            if rate_limit.remaining < LOW_RATE_LIMIT {
                warn!(
                    remaining = rate_limit.remaining,
                    reset_time = ?rate_limit.reset_time,
                    "GitHub rate limit low"
                );
            }
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(operation = O::NAME, %status, "GraphQL operation rejected");
            return Err(GitHubError::Http { status, body });
        }

        let text = response.text().await?;
        let envelope: GraphQlResponse<O::ResponseData> = serde_json::from_str(&text)?;

        match (envelope.data, envelope.errors) {
            (_, Some(errors)) if !errors.is_empty() => Err(GitHubError::GraphQl(errors)),
            (Some(data), _) => Ok(data),
            (None, _) => Err(GitHubError::MissingData(format!(
                "{} response carried no data",
                O::NAME
            ))),
        }
    }

    /// Fetch one page of an organization's repositories, most starred first.
    /// `cursor = None` requests the first page.
    pub async fn list_repositories(
        &self,
        organization_login: &str,
        cursor: Option<&str>,
    ) -> Result<RepositoryPage> {
        let organization_login = organization_login.trim();
        if organization_login.is_empty() {
            return Err(GitHubError::InvalidInput(
                "organization login is empty".to_string(),
            ));
        }

        let variables = RepositoriesVariables {
            organization: organization_login.to_string(),
            cursor: cursor.map(str::to_string),
        };
        let data = self
            .execute::<RepositoriesForOrganization>(&variables)
            .await?;

        let organization = data.organization.ok_or_else(|| {
            GitHubError::NotFound(format!("organization {}", organization_login))
        })?;
        let connection = organization.repositories;

        let repositories: Vec<RepositorySummary> = connection
            .edges
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|edge| edge.node)
            .map(|node| RepositorySummary {
                name: node.name,
                url: node.url,
            })
            .collect();

        if repositories.len() > PAGE_SIZE {
            return Err(GitHubError::Pagination(format!(
                "expected at most {} repositories per page, got {}",
                PAGE_SIZE,
                repositories.len()
            )));
        }

        Ok(RepositoryPage {
            organization_name: organization.name,
            organization_url: organization.url,
            repositories,
            end_cursor: connection.page_info.end_cursor,
            has_next_page: connection.page_info.has_next_page,
        })
    }

    /// Walk every page of an organization's repositories.
    ///
    /// Pages are requested one after another; each request needs the cursor
    /// from the previous response.
    pub async fn list_all_repositories(
        &self,
        organization_login: &str,
    ) -> Result<OrganizationRepositories> {
        let mut page = self.list_repositories(organization_login, None).await?;
        let mut all = OrganizationRepositories {
            organization_name: page.organization_name.clone(),
            organization_url: page.organization_url.clone(),
            repositories: Vec::new(),
            pages: 0,
        };
        let mut seen_cursors = HashSet::new();

        loop {
            all.pages += 1;
            let next = page.next_cursor().map(str::to_string);
            all.repositories.append(&mut page.repositories);

            let cursor = match next {
                Some(cursor) => cursor,
                None if page.has_next_page => {
                    return Err(GitHubError::Pagination(format!(
                        "page {} reported a next page without an end cursor",
                        all.pages
                    )));
                }
                None => break,
            };

            if !seen_cursors.insert(cursor.clone()) {
                return Err(GitHubError::Pagination(format!(
                    "cursor {} was returned twice",
                    cursor
                )));
            }

            info!(
                organization = organization_login,
                pages = all.pages,
                collected = all.repositories.len(),
                "Fetching next page of repositories"
            );
            page = self
                .list_repositories(organization_login, Some(&cursor))
                .await?;
        }

        Ok(all)
    }

    /// Star a repository. Starring an already starred repository is not an error.
    pub async fn add_favorite(&self, repository_id: &str) -> Result<StarOutcome> {
        validate_repository_id(repository_id)?;

        let data = self
            .execute::<AddFavorite>(&AddFavoriteVariables {
                repository_id: repository_id.to_string(),
            })
            .await?;

        star_outcome(AddFavorite::NAME, data.add_star)
    }

    /// Unstar a repository. Unstarring an unstarred repository is not an error.
    pub async fn remove_favorite(&self, repository_id: &str) -> Result<StarOutcome> {
        validate_repository_id(repository_id)?;

        let data = self
            .execute::<RemoveFavorite>(&RemoveFavoriteVariables {
                favoriting_id: repository_id.to_string(),
            })
            .await?;

        star_outcome(RemoveFavorite::NAME, data.remove_star)
    }
}

fn validate_repository_id(repository_id: &str) -> Result<()> {
    if repository_id.trim().is_empty() {
        return Err(GitHubError::InvalidInput("repository id is empty".to_string()));
    }
    Ok(())
}

fn star_outcome(operation: &str, payload: Option<StarPayload>) -> Result<StarOutcome> {
    let starrable = payload
        .and_then(|payload| payload.starrable)
        .ok_or_else(|| GitHubError::MissingData(format!("{} returned no starrable", operation)))?;

    Ok(StarOutcome {
        repository_id: starrable.id,
        viewer_has_starred: starrable.viewer_has_starred,
    })
}
