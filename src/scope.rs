//! Scopes under which project boards are enumerated or looked up.
//!
//! Each scope has its own pair of named GraphQL queries (listing and
//! single-project lookup). Query construction is dispatched on the [`Scope`]
//! variant so callers never pick query documents by hand.

use crate::repo::RepositoryContext;
use crate::types::Variables;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Cursor variable name shared by every listing query.
pub const CURSOR_VARIABLE: &str = "endCursor";

/// Maximum page size accepted by the remote connection.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Context under which projects are listed or looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// The authenticated viewer, bound to the repository host.
    CurrentUser,
    /// The repository in the current context.
    Repository,
    /// A named organization.
    Organization(String),
}

/// A named query document plus the field path to its payload under `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphQlQuery {
    pub name: &'static str,
    pub document: &'static str,
    pub root: &'static [&'static str],
}

macro_rules! project_fields {
    () => {
        "id title number closed closedAt public shortDescription resourcePath url"
    };
}

macro_rules! list_query {
    ($name:literal, $args:literal, $owner:literal) => {
        concat!(
            "query ",
            $name,
            "(",
            $args,
            "$first: Int!, $endCursor: String, $query: String) { ",
            $owner,
            " { projectsV2(first: $first, after: $endCursor, query: $query, ",
            "orderBy: {field: TITLE, direction: ASC}) { nodes { ",
            project_fields!(),
            " } pageInfo { hasNextPage endCursor } } } }"
        )
    };
}

macro_rules! view_query {
    ($name:literal, $args:literal, $owner:literal) => {
        concat!(
            "query ",
            $name,
            "(",
            $args,
            "$number: Int!) { ",
            $owner,
            " { projectV2(number: $number) { ",
            project_fields!(),
            " } } }"
        )
    };
}

pub const USER_LIST: GraphQlQuery = GraphQlQuery {
    name: "UserProjectV2List",
    document: list_query!("UserProjectV2List", "", "viewer"),
    root: &["viewer", "projectsV2"],
};

pub const REPOSITORY_LIST: GraphQlQuery = GraphQlQuery {
    name: "RepositoryProjectV2List",
    document: list_query!(
        "RepositoryProjectV2List",
        "$owner: String!, $name: String!, ",
        "repository(owner: $owner, name: $name)"
    ),
    root: &["repository", "projectsV2"],
};

pub const ORGANIZATION_LIST: GraphQlQuery = GraphQlQuery {
    name: "OrganizationProjectV2List",
    document: list_query!(
        "OrganizationProjectV2List",
        "$owner: String!, ",
        "organization(login: $owner)"
    ),
    root: &["organization", "projectsV2"],
};

pub const USER_VIEW: GraphQlQuery = GraphQlQuery {
    name: "UserProjectV2View",
    document: view_query!("UserProjectV2View", "", "viewer"),
    root: &["viewer", "projectV2"],
};

pub const REPOSITORY_VIEW: GraphQlQuery = GraphQlQuery {
    name: "RepoProjectV2View",
    document: view_query!(
        "RepoProjectV2View",
        "$owner: String!, $name: String!, ",
        "repository(owner: $owner, name: $name)"
    ),
    root: &["repository", "projectV2"],
};

pub const ORGANIZATION_VIEW: GraphQlQuery = GraphQlQuery {
    name: "OrganizationProjectV2View",
    document: view_query!(
        "OrganizationProjectV2View",
        "$owner: String!, ",
        "organization(login: $owner)"
    ),
    root: &["organization", "projectV2"],
};

impl Scope {
    /// Organization scope, or `None` when no usable name was supplied.
    pub fn organization(name: Option<&str>) -> Option<Scope> {
        name.map(str::trim)
            .filter(|n| !n.is_empty())
            .map(|n| Scope::Organization(n.to_string()))
    }

    /// Either/or choice for single-scope listings: the organization when
    /// named, the current user otherwise.
    pub fn for_listing(org: Option<&str>) -> Scope {
        Scope::organization(org).unwrap_or(Scope::CurrentUser)
    }

    /// Scopes aggregated by a full listing, in order.
    pub fn listing_order(org: Option<&str>) -> Vec<Scope> {
        let mut scopes = vec![Scope::CurrentUser];
        scopes.extend(Scope::organization(org));
        scopes.push(Scope::Repository);
        scopes
    }

    /// Scopes tried by a single-project lookup, highest priority first.
    pub fn lookup_order(org: Option<&str>) -> Vec<Scope> {
        let mut scopes = vec![Scope::CurrentUser, Scope::Repository];
        scopes.extend(Scope::organization(org));
        scopes
    }

    pub fn list_query(&self) -> &'static GraphQlQuery {
        match self {
            Scope::CurrentUser => &USER_LIST,
            Scope::Repository => &REPOSITORY_LIST,
            Scope::Organization(_) => &ORGANIZATION_LIST,
        }
    }

    pub fn lookup_query(&self) -> &'static GraphQlQuery {
        match self {
            Scope::CurrentUser => &USER_VIEW,
            Scope::Repository => &REPOSITORY_VIEW,
            Scope::Organization(_) => &ORGANIZATION_VIEW,
        }
    }

    /// Scope-identifying variables. The current user needs none.
    pub fn variables(&self, repo: &dyn RepositoryContext) -> Variables {
        let mut vars = Variables::new();
        match self {
            Scope::CurrentUser => {}
            Scope::Repository => {
                vars.insert("owner".into(), Value::from(repo.repo_owner()));
                vars.insert("name".into(), Value::from(repo.repo_name()));
            }
            Scope::Organization(login) => {
                vars.insert("owner".into(), Value::from(login.as_str()));
            }
        }
        vars
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::CurrentUser => "user",
            Scope::Repository => "repository",
            Scope::Organization(_) => "organization",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Organization(login) => write!(f, "organization {}", login),
            other => f.write_str(other.label()),
        }
    }
}
