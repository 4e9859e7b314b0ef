use crate::models::{AddStarData, RemoveStarData, RepositoriesData};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Repositories returned per page of `RepositoriesForOrganization`
pub const PAGE_SIZE: usize = 5;

/// A named GraphQL document together with its variable and response shapes.
pub trait Operation {
    const NAME: &'static str;
    const DOCUMENT: &'static str;

    type Variables: Serialize;
    type ResponseData: DeserializeOwned;
}

/// An organization and a page of its repositories ordered by stargazers, descending.
pub struct RepositoriesForOrganization;

#[derive(Debug, Clone, Serialize)]
pub struct RepositoriesVariables {
    pub organization: String,
    pub cursor: Option<String>,
}

impl Operation for RepositoriesForOrganization {
    const NAME: &'static str = "RepositoriesForOrganization";
    const DOCUMENT: &'static str = r#"
query RepositoriesForOrganization($organization: String!, $cursor: String) {
  organization(login: $organization) {
    name
    url
    repositories(first: 5, orderBy: { field: STARGAZERS, direction: DESC }, after: $cursor) {
      edges {
        node {
          name
          url
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
"#;

    type Variables = RepositoriesVariables;
    type ResponseData = RepositoriesData;
}

/// Stars a repository through GitHub's `addStar`.
pub struct AddFavorite;

#[derive(Debug, Clone, Serialize)]
pub struct AddFavoriteVariables {
    #[serde(rename = "repositoryId")]
    pub repository_id: String,
}

impl Operation for AddFavorite {
    const NAME: &'static str = "AddFavorite";
    const DOCUMENT: &'static str = r#"
mutation AddFavorite($repositoryId: ID!) {
  addStar(input: { starrableId: $repositoryId }) {
    starrable {
      id
      viewerHasStarred
    }
  }
}
"#;

    type Variables = AddFavoriteVariables;
    type ResponseData = AddStarData;
}

/// Unstars a repository through GitHub's `removeStar`.
pub struct RemoveFavorite;

#[derive(Debug, Clone, Serialize)]
pub struct RemoveFavoriteVariables {
    #[serde(rename = "favoritingId")]
    pub favoriting_id: String,
}

impl Operation for RemoveFavorite {
    const NAME: &'static str = "RemoveFavorite";
    const DOCUMENT: &'static str = r#"
mutation RemoveFavorite($favoritingId: ID!) {
  removeStar(input: { starrableId: $favoritingId }) {
    starrable {
      id
      viewerHasStarred
    }
  }
}
"#;

    type Variables = RemoveFavoriteVariables;
    type ResponseData = RemoveStarData;
}
