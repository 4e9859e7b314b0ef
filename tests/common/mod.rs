#![allow(dead_code)]

use github_favorites::{AccessToken, ClientConfig, GitHubClient};
use mockito::ServerGuard;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test_token";
pub const REPOSITORY_ID: &str = "MDEwOlJlcG9zaXRvcnk2MzM1MjkwNw==";

pub fn graphql_url(server: &ServerGuard) -> String {
    format!("{}/graphql", server.url())
}

pub fn client_for(server: &ServerGuard, token: AccessToken) -> GitHubClient {
    let config = ClientConfig::new(&graphql_url(server), token).expect("valid mock endpoint");
    GitHubClient::new(config).expect("Failed to create client")
}

/// Response body for one page of `RepositoriesForOrganization`
pub fn page_body(names: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> String {
    let edges: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "node": {
                    "name": name,
                    "url": format!("https://github.com/the-road-to-learn-react/{}", name),
                }
            })
        })
        .collect();

    json!({
        "data": {
            "organization": {
                "name": "The Road to learn React",
                "url": "https://github.com/the-road-to-learn-react",
                "repositories": {
                    "edges": edges,
                    "pageInfo": {
                        "endCursor": end_cursor,
                        "hasNextPage": has_next_page,
                    }
                }
            }
        }
    })
    .to_string()
}

/// Response body for `AddFavorite` (`addStar`) or `RemoveFavorite` (`removeStar`)
pub fn star_body(field: &str, repository_id: &str, starred: bool) -> String {
    json!({
        "data": {
            field: {
                "starrable": {
                    "id": repository_id,
                    "viewerHasStarred": starred,
                }
            }
        }
    })
    .to_string()
}
