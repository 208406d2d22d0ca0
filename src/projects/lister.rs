//! Single-scope and aggregated project listings.

use super::{collect, ProjectsApi};
use crate::error::{ListAllError, TransportError};
use crate::repo::RepositoryContext;
use crate::scope::Scope;
use crate::types::{Project, ProjectState, Variables};
use serde_json::Value;
use tracing::{debug, info, warn};

impl ProjectsApi {
    /// List projects in exactly one scope: the organization when `org` is a
    /// non-empty name, otherwise the current user.
    pub async fn list_for_scope(
        &self,
        repo: &dyn RepositoryContext,
        org: Option<&str>,
        state: ProjectState,
    ) -> Result<Vec<Project>, TransportError> {
        let scope = Scope::for_listing(org);
        let projects = self.list_scope(&scope, repo, state).await?;
        info!(scope = %scope, count = projects.len(), "Listed projects");
        Ok(projects)
    }

    /// Concatenate the current user, organization (when named), and
    /// repository listings, in that order.
    ///
    /// Stops at the first failing scope; the error carries whatever earlier
    /// scopes returned. No deduplication is done across scopes.
    pub async fn list_all(
        &self,
        repo: &dyn RepositoryContext,
        org: Option<&str>,
    ) -> Result<Vec<Project>, ListAllError> {
        let mut projects = Vec::new();
        for scope in Scope::listing_order(org) {
            match self.list_scope(&scope, repo, ProjectState::All).await {
                Ok(found) => {
                    debug!(scope = %scope, count = found.len(), "Scope listed");
                    projects.extend(found);
                }
                Err(source) => {
                    warn!(scope = %scope, error = %source, "Scope listing failed");
                    return Err(ListAllError {
                        scope,
                        partial: projects,
                        source,
                    });
                }
            }
        }
        info!(count = projects.len(), "Listed projects across scopes");
        Ok(projects)
    }

    /// Fully paginated listing for one scope.
    pub async fn list_scope(
        &self,
        scope: &Scope,
        repo: &dyn RepositoryContext,
        state: ProjectState,
    ) -> Result<Vec<Project>, TransportError> {
        let mut variables: Variables = scope.variables(repo);
        variables.insert("first".to_string(), Value::from(self.page_size));
        variables.insert(
            "query".to_string(),
            state.search_query().map_or(Value::Null, Value::from),
        );
        collect(
            self.transport(),
            repo.repo_host(),
            scope.list_query(),
            variables,
        )
        .await
    }
}
