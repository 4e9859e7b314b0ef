use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
}

/// One page of an organization's repositories, most starred first
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryPage {
    pub organization_name: Option<String>,
    pub organization_url: String,
    pub repositories: Vec<RepositorySummary>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

impl RepositoryPage {
    /// Cursor for the following page. `None` once the server reports no next
    /// page, even if it still sent an `endCursor`.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Every repository of an organization, collected page by page
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationRepositories {
    pub organization_name: Option<String>,
    pub organization_url: String,
    pub repositories: Vec<RepositorySummary>,
    pub pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarOutcome {
    pub repository_id: String,
    pub viewer_has_starred: bool,
}
