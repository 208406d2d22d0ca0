//! Single-project lookup with ordered scope fallback.

use super::ProjectsApi;
use crate::error::{ProjectNotFound, ScopeError, TransportError};
use crate::repo::RepositoryContext;
use crate::scope::Scope;
use crate::transport::extract_root;
use crate::types::Project;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

impl ProjectsApi {
    /// Resolve project `number` by trying the current user, the repository,
    /// and the organization (only when `org` names one), in that order.
    ///
    /// The first tier that returns a project wins. A tier's transport error
    /// never stops later tiers; it is kept and reported only when every tier
    /// comes up empty.
    pub async fn locate(
        &self,
        repo: &dyn RepositoryContext,
        org: Option<&str>,
        number: u32,
    ) -> Result<Project, ProjectNotFound> {
        let mut failures = Vec::new();

        for scope in Scope::lookup_order(org) {
            match self.lookup(&scope, repo, number).await {
                Ok(Some(project)) => {
                    info!(scope = %scope, number, "Resolved project");
                    return Ok(project);
                }
                Ok(None) => debug!(scope = %scope, number, "Project not in scope"),
                Err(source) => {
                    warn!(scope = %scope, number, error = %source, "Project lookup failed");
                    failures.push(ScopeError { scope, source });
                }
            }
        }

        Err(ProjectNotFound { number, failures })
    }

    /// Fetch project `number` from one scope. `Ok(None)` means the scope
    /// answered but holds no such project.
    pub async fn lookup(
        &self,
        scope: &Scope,
        repo: &dyn RepositoryContext,
        number: u32,
    ) -> Result<Option<Project>, TransportError> {
        let query = scope.lookup_query();
        let mut variables = scope.variables(repo);
        variables.insert("number".to_string(), Value::from(number));

        let data = self
            .transport()
            .query(repo.repo_host(), query, &variables)
            .await?;

        let node = extract_root(query, &data)?;
        if node.is_null() {
            return Ok(None);
        }
        Project::deserialize(node)
            .map(Some)
            .map_err(|e| TransportError::Decode {
                query: query.name.to_string(),
                message: e.to_string(),
            })
    }
}
