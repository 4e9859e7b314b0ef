use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body posted to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'static str,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: &'a V,
}

/// Envelope every GraphQL response arrives in
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub path: Option<Vec<serde_json::Value>>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "[{}] {}", kind, self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}

// RepositoriesForOrganization response
#[derive(Debug, Deserialize)]
pub struct RepositoriesData {
    pub organization: Option<OrganizationNode>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationNode {
    pub name: Option<String>,
    pub url: String,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    pub edges: Option<Vec<Option<RepositoryEdge>>>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryEdge {
    pub node: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode {
    pub name: String,
    pub url: String,
}

// AddFavorite / RemoveFavorite responses
#[derive(Debug, Deserialize)]
pub struct AddStarData {
    #[serde(rename = "addStar")]
    pub add_star: Option<StarPayload>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveStarData {
    #[serde(rename = "removeStar")]
    pub remove_star: Option<StarPayload>,
}

#[derive(Debug, Deserialize)]
pub struct StarPayload {
    pub starrable: Option<Starrable>,
}

#[derive(Debug, Deserialize)]
pub struct Starrable {
    pub id: String,
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
}

/// Rate limit budget reported by GitHub on each response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitState {
    pub remaining: u32,
    pub reset_time: Option<DateTime<Utc>>,
}

impl RateLimitState {
    /// `None` when the response carries no `X-RateLimit-Remaining` header.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = headers
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())?;

        let reset_time = headers
            .get("X-RateLimit-Reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0));

        Some(RateLimitState {
            remaining,
            reset_time,
        })
    }
}
